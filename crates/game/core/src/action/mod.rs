//! Action resolution state machine.
//!
//! [`resolve`] feeds one abstract input to the machine. The current
//! [`InteractionMode`] decides how the input is read; multi-step actions carry
//! what they still need in a [`Continuation`] until the input that finishes
//! them arrives. Every step reports whether the actor's turn was spent.
pub mod error;
pub mod interact;
pub mod inventory;
pub mod movement;
pub mod targeting;
pub mod transition;
pub mod types;

pub use error::{ActionError, Refusal};
pub use interact::{FixtureAction, FixtureVerb, PickUpAction};
pub use inventory::{
    ConsumeAction, DropAction, MenuEntry, UseAction, WearAction, WieldAction, describe_item,
    menu_entries, supports,
};
pub use movement::MoveAction;
pub use targeting::ThrowAction;
pub use transition::{ActionTransition, perform};
pub use types::{
    CardinalDirection, Continuation, DirectionalVerb, InputEvent, InteractionMode, MenuVerb,
    Resolution, Step,
};

use crate::config::GameConfig;
use crate::error::ErrorContext;
use crate::state::{EntityId, GameState};

const CANCEL_MESSAGE: &str = "You decide not to continue with this plan.";

/// Where the machine currently stands between inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub mode: InteractionMode,
    pub pending: Option<Continuation>,
}

impl Interaction {
    /// Adopts the mode and continuation a resolution asks for.
    pub fn advance(&mut self, resolution: Resolution) {
        self.mode = resolution.mode;
        self.pending = resolution.continuation;
    }
}

/// Resolves one input for `actor` against the current interaction.
///
/// Inputs that make no sense in the current mode are ignored and leave the
/// interaction untouched. A directional or targeted mode without a matching
/// continuation is a fault.
pub fn resolve(
    state: &mut GameState,
    config: &GameConfig,
    actor: EntityId,
    interaction: Interaction,
    input: InputEvent,
) -> Result<Step, ActionError> {
    let Interaction { mode, pending } = interaction;
    let unchanged = Resolution::stay(mode, pending);

    if input == InputEvent::Exit {
        return Ok(Step::Exit);
    }
    if input == InputEvent::Cancel && mode != InteractionMode::Immediate {
        state.tell(actor, CANCEL_MESSAGE);
        return Ok(Step::Continue(Resolution::immediate(false)));
    }

    let resolution = match mode {
        InteractionMode::Immediate => resolve_immediate(state, actor, input)?,
        InteractionMode::Directional => {
            let Some(Continuation::Directional { verb, actor, origin }) = pending else {
                return Err(missing_continuation(state, actor, interaction));
            };
            match input {
                InputEvent::Move(direction) => {
                    interact::complete(state, verb, actor, origin, direction)?
                }
                _ => unchanged,
            }
        }
        InteractionMode::Targeted => {
            let continuation = match pending {
                Some(continuation @ (Continuation::Examine { .. } | Continuation::Throw { .. })) => {
                    continuation
                }
                _ => return Err(missing_continuation(state, actor, interaction)),
            };
            match (input, continuation) {
                (InputEvent::Target(target), Continuation::Examine { actor, .. }) => {
                    targeting::examine(state, actor, target)?
                }
                (InputEvent::Target(target), Continuation::Throw { actor, item, origin }) => {
                    let action = ThrowAction {
                        actor,
                        item,
                        origin,
                        target,
                        range: config.throw_range,
                    };
                    Resolution::immediate(perform(state, &action)?)
                }
                _ => unchanged,
            }
        }
        InteractionMode::Menu(filter) => match input {
            InputEvent::InventorySelect(key) => inventory::select(state, actor, filter, key)?,
            InputEvent::ShowInventory(filter) => {
                Resolution::stay(InteractionMode::Menu(filter), None)
            }
            InputEvent::HideInventory => Resolution::immediate(false),
            _ => unchanged,
        },
    };
    Ok(Step::Continue(resolution))
}

fn resolve_immediate(
    state: &mut GameState,
    actor: EntityId,
    input: InputEvent,
) -> Result<Resolution, ActionError> {
    let verb = match input {
        InputEvent::Move(direction) => {
            return Ok(Resolution::immediate(movement::step(state, actor, direction)?));
        }
        InputEvent::Wait => return Ok(Resolution::immediate(true)),
        InputEvent::Examine => {
            let origin = state.standing_position(actor)?;
            state.tell(actor, "Which place do you want to examine?");
            return Ok(Resolution::pending(Continuation::Examine { actor, origin }));
        }
        InputEvent::ShowInventory(filter) => {
            return Ok(Resolution::stay(InteractionMode::Menu(filter), None));
        }
        InputEvent::Get => DirectionalVerb::Get,
        InputEvent::Open => DirectionalVerb::Open,
        InputEvent::Close => DirectionalVerb::Close,
        InputEvent::Lock => DirectionalVerb::Lock,
        InputEvent::Unlock => DirectionalVerb::Unlock,
        InputEvent::HideInventory
        | InputEvent::InventorySelect(_)
        | InputEvent::Target(_)
        | InputEvent::Cancel
        | InputEvent::Exit => return Ok(Resolution::immediate(false)),
    };
    interact::begin(state, actor, verb)
}

fn missing_continuation(state: &GameState, actor: EntityId, interaction: Interaction) -> ActionError {
    ActionError::MissingContinuation {
        context: ErrorContext::new(state.turn, actor).in_interaction(interaction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::state::{Door, Position};
    use crate::testing::*;

    fn run(
        state: &mut GameState,
        interaction: &mut Interaction,
        input: InputEvent,
    ) -> Resolution {
        let step = resolve(state, &GameConfig::default(), EntityId::PLAYER, *interaction, input)
            .unwrap();
        let resolution = step.resolution().unwrap();
        interaction.advance(resolution);
        resolution
    }

    #[test]
    fn exit_is_honoured_in_every_mode() {
        let mut state = floor_state(3, 3);
        add_player(&mut state, Position::new(1, 1), 10);
        for mode in [
            InteractionMode::Immediate,
            InteractionMode::Menu(None),
            InteractionMode::Menu(Some(MenuVerb::Drop)),
        ] {
            let interaction = Interaction { mode, pending: None };
            let step = resolve(
                &mut state,
                &GameConfig::default(),
                EntityId::PLAYER,
                interaction,
                InputEvent::Exit,
            )
            .unwrap();
            assert_eq!(step, Step::Exit);
        }
    }

    #[test]
    fn directional_mode_without_a_continuation_is_a_fault() {
        let mut state = floor_state(3, 3);
        add_player(&mut state, Position::new(1, 1), 10);
        let interaction = Interaction {
            mode: InteractionMode::Directional,
            pending: None,
        };
        let error = resolve(
            &mut state,
            &GameConfig::default(),
            EntityId::PLAYER,
            interaction,
            InputEvent::Move(CardinalDirection::North),
        )
        .unwrap_err();
        assert!(matches!(error, ActionError::MissingContinuation { .. }));
        let context = error.context().unwrap();
        assert_eq!(context.interaction, Some(interaction));
        assert_eq!(context.pending(), None);
        assert_eq!(error.error_code(), "ACTION_MISSING_CONTINUATION");
    }

    #[test]
    fn targeted_mode_with_a_directional_continuation_reports_what_it_held() {
        let mut state = floor_state(3, 3);
        add_player(&mut state, Position::new(1, 1), 10);
        let pending = Continuation::Directional {
            verb: DirectionalVerb::Close,
            actor: EntityId::PLAYER,
            origin: Position::new(1, 1),
        };
        let interaction = Interaction {
            mode: InteractionMode::Targeted,
            pending: Some(pending),
        };
        let error = resolve(
            &mut state,
            &GameConfig::default(),
            EntityId::PLAYER,
            interaction,
            InputEvent::Target(Position::new(0, 0)),
        )
        .unwrap_err();
        assert_eq!(error.context().and_then(|context| context.pending()), Some(pending));
        assert!(error.to_string().contains("targeted mode awaiting a direction to close"));
    }

    #[test]
    fn cancelling_a_prompt_returns_to_immediate_mode() {
        let mut state = floor_state(5, 5);
        add_player(&mut state, Position::new(2, 2), 10);
        add_door(&mut state, Position::new(3, 2), Door::closed());
        add_door(&mut state, Position::new(1, 2), Door::closed());
        let mut interaction = Interaction::default();

        run(&mut state, &mut interaction, InputEvent::Open);
        assert_eq!(interaction.mode, InteractionMode::Directional);

        let resolution = run(&mut state, &mut interaction, InputEvent::Cancel);
        assert_eq!(resolution, Resolution::immediate(false));
        assert_eq!(interaction.pending, None);
        assert_eq!(state.narration.last(), Some(CANCEL_MESSAGE));
    }

    #[test]
    fn unrelated_input_keeps_the_prompt_waiting() {
        let mut state = floor_state(5, 5);
        add_player(&mut state, Position::new(2, 2), 10);
        add_door(&mut state, Position::new(3, 2), Door::closed());
        add_door(&mut state, Position::new(1, 2), Door::closed());
        let mut interaction = Interaction::default();

        run(&mut state, &mut interaction, InputEvent::Open);
        let pending = interaction.pending;
        let resolution = run(&mut state, &mut interaction, InputEvent::Wait);
        assert!(!resolution.turn_elapsed);
        assert_eq!(interaction.mode, InteractionMode::Directional);
        assert_eq!(interaction.pending, pending);

        let resolution = run(
            &mut state,
            &mut interaction,
            InputEvent::Move(CardinalDirection::West),
        );
        assert!(resolution.turn_elapsed);
        assert_eq!(interaction, Interaction::default());
    }

    #[test]
    fn waiting_spends_a_turn() {
        let mut state = floor_state(3, 3);
        add_player(&mut state, Position::new(1, 1), 10);
        let mut interaction = Interaction::default();
        assert!(run(&mut state, &mut interaction, InputEvent::Wait).turn_elapsed);
    }

    #[test]
    fn the_inventory_can_be_shown_refiltered_and_hidden() {
        let mut state = floor_state(3, 3);
        add_player(&mut state, Position::new(1, 1), 10);
        let mut interaction = Interaction::default();

        run(&mut state, &mut interaction, InputEvent::ShowInventory(None));
        assert_eq!(interaction.mode, InteractionMode::Menu(None));
        run(
            &mut state,
            &mut interaction,
            InputEvent::ShowInventory(Some(MenuVerb::Consume)),
        );
        assert_eq!(interaction.mode, InteractionMode::Menu(Some(MenuVerb::Consume)));
        let resolution = run(&mut state, &mut interaction, InputEvent::HideInventory);
        assert_eq!(resolution, Resolution::immediate(false));
        assert!(state.narration.is_empty());
    }

    #[test]
    fn examine_waits_for_a_target_then_describes_it() {
        let mut state = floor_state(3, 3);
        add_player(&mut state, Position::new(1, 1), 10);
        let mut interaction = Interaction::default();

        run(&mut state, &mut interaction, InputEvent::Examine);
        assert_eq!(interaction.mode, InteractionMode::Targeted);
        let resolution = run(
            &mut state,
            &mut interaction,
            InputEvent::Target(Position::new(0, 0)),
        );
        assert_eq!(resolution, Resolution::immediate(false));
        assert_eq!(state.narration.last(), Some("You have not seen that place."));
    }
}
