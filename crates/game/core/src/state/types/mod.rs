pub mod actor;
pub mod common;
pub mod container;
pub mod entities;
pub mod entity;
pub mod fixture;
pub mod grid;
pub mod item;
pub mod tile;

pub use actor::{ActorState, Behavior};
pub use common::{EntityId, Position, Turn};
pub use container::{Container, ContainerError, ContainerSlot};
pub use entities::EntitiesState;
pub use entity::{Entity, EntityCategory, EntityKind, Location, ReportAudience};
pub use fixture::{Door, Fixture, FixtureRejection, Openable, Window};
pub use grid::{Grid, GridError};
pub use item::{
    Consumable, Drink, Droppable, Gadget, GadgetKind, Garment, ItemKind, ItemRejection, Liquid,
    Usable, Weapon, Wearable, Wieldable,
};
pub use tile::{BlockFlags, Rgb, SlotKind, TerrainKind, Tile};
