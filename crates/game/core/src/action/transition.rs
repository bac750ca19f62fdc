use crate::action::{ActionError, Refusal};
use crate::state::{EntityId, GameState};

/// Defines how a concrete action checks its preconditions and mutates the state.
///
/// `pre_validate` is side-effect free. `apply` may assume it has already
/// passed, and narrates the outcome itself.
pub trait ActionTransition {
    fn actor(&self) -> EntityId;

    /// Validates game-rule preconditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), Refusal> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState) -> Result<(), ActionError>;
}

/// Runs an action end to end.
///
/// Returns `Ok(true)` when the action went ahead and so spent the actor's
/// turn. Unmet preconditions are told to the actor and return `Ok(false)`.
pub fn perform<A>(state: &mut GameState, action: &A) -> Result<bool, ActionError>
where
    A: ActionTransition + ?Sized,
{
    match action.pre_validate(state) {
        Ok(()) => {
            action.apply(state)?;
            Ok(true)
        }
        Err(Refusal::Unmet(message)) => {
            state.tell(action.actor(), message);
            Ok(false)
        }
        Err(Refusal::Silent) => Ok(false),
        Err(Refusal::Fault(error)) => Err(error),
    }
}
