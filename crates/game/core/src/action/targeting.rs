//! Actions completed by picking a tile: examining and throwing.

use crate::action::{ActionError, ActionTransition, Refusal, Resolution};
use crate::state::types::item::capitalize;
use crate::state::{EntityId, GameState, Position};
use crate::vision::has_clear_path;

/// Describes what the actor knows about a tile. Never spends a turn.
pub fn examine(
    state: &mut GameState,
    actor: EntityId,
    target: Position,
) -> Result<Resolution, ActionError> {
    let description = describe_tile(state, target)?;
    state.tell(actor, description);
    Ok(Resolution::immediate(false))
}

fn describe_tile(state: &GameState, target: Position) -> Result<String, ActionError> {
    let Some(tile) = state.grid.tile(target).filter(|tile| tile.is_seen()) else {
        return Ok("You have not seen that place.".to_string());
    };

    let mut parts = Vec::new();
    if let Some(id) = tile.occupant() {
        let occupant = state.entity(id)?;
        let name = occupant.indefinite_name();
        match occupant.as_actor().and_then(|actor| actor.descriptor.as_deref()) {
            Some(descriptor) => parts.push(format!("You see {name} ({descriptor}).")),
            None => parts.push(format!("You see {name}.")),
        }
    }
    if let Some(id) = tile.fixture() {
        let fixture = state.entity(id)?;
        if let Some(openable) = fixture.as_openable() {
            let status = match (openable.is_open(), openable.is_locked()) {
                (true, _) => "open",
                (false, true) => "closed and locked",
                (false, false) => "closed",
            };
            parts.push(format!("There is {} here. It is {status}.", fixture.indefinite_name()));
        }
    }
    if let Some(id) = tile.item() {
        let item = state.entity(id)?;
        parts.push(format!("{} lies here.", capitalize(&item.indefinite_name())));
    }
    if parts.is_empty() {
        parts.push(format!("You see {}.", tile.terrain.describe()));
    }
    Ok(parts.join(" "))
}

/// Throws a held item onto a tile within range and line of flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrowAction {
    pub actor: EntityId,
    pub item: EntityId,
    pub origin: Position,
    pub target: Position,
    pub range: u32,
}

impl ActionTransition for ThrowAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let held = state.entity(self.item)?.location().holder() == Some(self.actor);
        if !held {
            return Err(Refusal::unmet("You are no longer holding that."));
        }
        if !state.grid.contains(self.target) {
            return Err(Refusal::unmet("You cannot throw anything there."));
        }
        if self.origin.chebyshev_distance(self.target) > self.range {
            return Err(Refusal::unmet("That is too far away to throw."));
        }
        if self.target != self.origin
            && (!has_clear_path(state, self.origin, self.target)
                || state.effective_blocks_move(self.target))
        {
            return Err(Refusal::unmet("Something is in the way."));
        }
        if state.item_at(self.target).is_some() {
            return Err(Refusal::unmet("There is already something there."));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        state.unstow(self.actor, self.item)?;
        state.place_item(self.target, self.item)?;
        let name = state.entity(self.item)?.definite_name();
        state.report(
            self.actor,
            format!("You throw {name}."),
            |who| format!("{who} throws {name}."),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::perform;
    use crate::state::{Door, Entity, EntityCategory, ItemKind, Location, TerrainKind};
    use crate::testing::*;
    use crate::vision::compute_visible;

    fn throw(state: &mut GameState, player: EntityId, item: EntityId, target: Position) -> bool {
        let action = ThrowAction {
            actor: player,
            item,
            origin: state.standing_position(player).unwrap(),
            target,
            range: 3,
        };
        perform(state, &action).unwrap()
    }

    #[test]
    fn unseen_tiles_cannot_be_examined() {
        let mut state = floor_state(5, 5);
        let player = add_player(&mut state, Position::new(0, 0), 10);

        let resolution = examine(&mut state, player, Position::new(4, 4)).unwrap();
        assert!(!resolution.turn_elapsed);
        assert_eq!(state.narration.last(), Some("You have not seen that place."));
    }

    #[test]
    fn examining_lists_what_the_tile_holds() {
        let mut state = floor_state(5, 5);
        let player = add_player(&mut state, Position::new(0, 0), 10);
        add_door(&mut state, Position::new(1, 0), Door::locked());
        add_item(&mut state, "pistol", ItemKind::Plain, 1, Position::new(0, 1));
        compute_visible(&mut state, Position::new(0, 0), 3);

        examine(&mut state, player, Position::new(1, 0)).unwrap();
        assert_eq!(
            state.narration.last(),
            Some("There is a door here. It is closed and locked.")
        );
        examine(&mut state, player, Position::new(0, 1)).unwrap();
        assert_eq!(state.narration.last(), Some("A pistol lies here."));
        examine(&mut state, player, Position::new(1, 1)).unwrap();
        assert_eq!(state.narration.last(), Some("You see laminate flooring."));
    }

    #[test]
    fn thrown_items_land_on_the_target() {
        let mut state = floor_state(7, 7);
        let player = add_player(&mut state, Position::new(1, 1), 10);
        let can = give_item(
            &mut state,
            player,
            Entity::item("soda can", EntityCategory::Comestible, ItemKind::Plain),
        );

        assert!(throw(&mut state, player, can, Position::new(3, 3)));
        assert_eq!(
            state.entity(can).unwrap().location(),
            Location::Ground(Position::new(3, 3))
        );
        assert_eq!(state.narration.last(), Some("You throw the soda can."));
    }

    #[test]
    fn throws_respect_range_and_obstacles() {
        let mut state = floor_state(7, 7);
        let player = add_player(&mut state, Position::new(1, 1), 10);
        state
            .grid
            .set_terrain(Position::new(2, 1), TerrainKind::Wall)
            .unwrap();
        let can = give_item(
            &mut state,
            player,
            Entity::item("soda can", EntityCategory::Comestible, ItemKind::Plain),
        );

        assert!(!throw(&mut state, player, can, Position::new(6, 6)));
        assert_eq!(state.narration.last(), Some("That is too far away to throw."));
        assert!(!throw(&mut state, player, can, Position::new(3, 1)));
        assert_eq!(state.narration.last(), Some("Something is in the way."));
        assert_eq!(
            state.entity(can).unwrap().location(),
            Location::Contained { holder: player }
        );
    }
}
