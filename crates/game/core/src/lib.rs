//! Deterministic game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules (grid, entities, visibility and
//! action resolution) and exposes pure APIs reused by the runtime, the content
//! loader and front-ends. All gameplay mutation flows through
//! [`action::resolve`]; front-ends observe the outcome through the
//! [`state::Narration`] stream and a [`render::RenderModel`].
pub mod action;
pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod vision;

#[cfg(test)]
mod testing;

pub use action::{
    ActionError, ActionTransition, CardinalDirection, Continuation, DirectionalVerb, InputEvent,
    Interaction, InteractionMode, MenuEntry, MenuVerb, Refusal, Resolution, Step, perform,
    resolve,
};
pub use config::GameConfig;
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use render::{Glyph, MenuView, RenderModel, RenderTile, TileStatus};
pub use state::{
    ActorState, Behavior, BlockFlags, Container, ContainerError, Door, Drink, Entity,
    EntityCategory, EntityId, EntityKind, Fixture, Gadget, GadgetKind, GameState, Garment, Grid,
    GridError, ItemKind, Liquid, Location, Narration, NarrationLine, Position, ReportAudience,
    Rgb, StateError, TerrainKind, Tile, Turn, Weapon, Window,
};
pub use vision::{FieldOfView, compute_visible, has_clear_path};
