//! Builders shared by unit tests.

use crate::state::{
    ActorState, Door, Entity, EntityCategory, EntityId, Fixture, GameState, Grid, ItemKind,
    Position, ReportAudience, TerrainKind, Window,
};

pub(crate) fn floor_state(width: u32, height: u32) -> GameState {
    let mut grid = Grid::new(width, height).unwrap();
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            grid.set_terrain(Position::new(x, y), TerrainKind::Floor)
                .unwrap();
        }
    }
    GameState::new(grid)
}

pub(crate) fn add_player(state: &mut GameState, position: Position, capacity: u32) -> EntityId {
    let player = Entity::actor("Bob Smith", ActorState::new(15, capacity))
        .proper()
        .with_report(ReportAudience::Player);
    let id = state.spawn_player(player);
    state.place_occupant(position, id).unwrap();
    id
}

pub(crate) fn add_npc(state: &mut GameState, name: &str, position: Position) -> EntityId {
    let id = state.spawn(Entity::actor(name, ActorState::new(5, 5)));
    state.place_occupant(position, id).unwrap();
    id
}

pub(crate) fn add_item(
    state: &mut GameState,
    name: &str,
    kind: ItemKind,
    weight: u32,
    position: Position,
) -> EntityId {
    let id = state.spawn(
        Entity::item(name, EntityCategory::Other, kind).with_weight(weight),
    );
    state.place_item(position, id).unwrap();
    id
}

pub(crate) fn give_item(
    state: &mut GameState,
    holder: EntityId,
    entity: Entity,
) -> EntityId {
    let id = state.spawn(entity);
    state.stow(holder, id).unwrap();
    id
}

pub(crate) fn add_door(state: &mut GameState, position: Position, door: Door) -> EntityId {
    state.grid.set_terrain(position, TerrainKind::Door).unwrap();
    let id = state.spawn(Entity::fixture(Fixture::Door(door)));
    state.attach_fixture(position, id).unwrap();
    id
}

pub(crate) fn add_window(state: &mut GameState, position: Position) -> EntityId {
    state.grid.set_terrain(position, TerrainKind::Window).unwrap();
    let id = state.spawn(Entity::fixture(Fixture::Window(Window::default())));
    state.attach_fixture(position, id).unwrap();
    id
}

pub(crate) fn is_open(state: &GameState, fixture: EntityId) -> bool {
    state
        .entity(fixture)
        .unwrap()
        .as_openable()
        .unwrap()
        .is_open()
}
