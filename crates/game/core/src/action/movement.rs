//! Stepping an actor one tile in any of the eight directions.

use crate::action::{
    ActionError, ActionTransition, CardinalDirection, FixtureAction, FixtureVerb, Refusal,
    perform,
};
use crate::error::ErrorContext;
use crate::state::{EntityId, GameState, Position};

/// Moves a standing actor to the adjacent tile in `direction`.
///
/// Every refusal is silent: walking into walls, off the map or around a
/// blocked corner simply does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: EntityId,
    pub direction: CardinalDirection,
}

impl MoveAction {
    fn destination(&self, state: &GameState) -> Result<(Position, Position), Refusal> {
        let origin = state.standing_position(self.actor)?;
        Ok((origin, self.direction.step(origin)))
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let (origin, destination) = self.destination(state)?;
        if !state.grid.contains(destination) {
            return Err(Refusal::Silent);
        }
        if cuts_corner(state, origin, self.direction) {
            return Err(Refusal::Silent);
        }
        if state.effective_blocks_move(destination) || state.occupant_at(destination).is_some() {
            return Err(Refusal::Silent);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let destination = self.direction.step(state.standing_position(self.actor)?);
        if state.move_occupant(self.actor, destination)?.is_some() {
            return Err(ActionError::drift(
                "move",
                ErrorContext::new(state.turn, self.actor),
            ));
        }
        Ok(())
    }
}

/// A diagonal step may not squeeze between two tiles when either one blocks.
fn cuts_corner(state: &GameState, origin: Position, direction: CardinalDirection) -> bool {
    if !direction.is_diagonal() {
        return false;
    }
    let (dx, dy) = direction.offset();
    state.effective_blocks_move(origin.offset(dx, 0))
        || state.effective_blocks_move(origin.offset(0, dy))
}

/// Resolves a movement input for `actor`.
///
/// Walking into a closed fixture that opens on bump opens it instead of
/// moving; that spends the turn but leaves the actor where it was.
pub fn step(
    state: &mut GameState,
    actor: EntityId,
    direction: CardinalDirection,
) -> Result<bool, ActionError> {
    let origin = state.standing_position(actor)?;
    let destination = direction.step(origin);

    let bump_target = state.fixture_at(destination).filter(|id| {
        state
            .entities
            .get(*id)
            .and_then(|entity| entity.as_openable())
            .is_some_and(|openable| openable.opens_on_bump() && openable.is_closed())
    });
    if let Some(fixture) = bump_target
        && !cuts_corner(state, origin, direction)
    {
        let action = FixtureAction {
            actor,
            fixture,
            verb: FixtureVerb::Open,
        };
        return perform(state, &action);
    }

    perform(state, &MoveAction { actor, direction })
}
