//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`GridError`, `ContainerError`, `ActionError`, ...) are
//! defined in their respective modules alongside the operations they validate.
//! Game-rule refusals such as "the door is already open" are never errors: they
//! are narrated and cost no turn. The types here only describe faults that the
//! caller has to handle.

use core::fmt;

use crate::action::{Continuation, Interaction};
use crate::state::{EntityId, Turn};

/// Who is at fault for an error, which decides how a caller reacts to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later (an inventory with no room yet).
    Recoverable,
    /// The request named something that does not exist.
    Validation,
    /// The model or the state machine was driven against its invariants.
    Internal,
    /// The session cannot start or continue.
    Fatal,
}

/// Where the acting entity stood when a fault surfaced.
///
/// Faults raised while applying an action record the turn and the actor.
/// Faults raised by the state machine itself also record the interaction it
/// was holding, so a mode paired with the wrong continuation can be read
/// straight off the log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErrorContext {
    pub turn: Turn,
    pub actor: EntityId,
    pub interaction: Option<Interaction>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(turn: Turn, actor: EntityId) -> Self {
        Self {
            turn,
            actor,
            interaction: None,
        }
    }

    #[must_use]
    pub const fn in_interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = Some(interaction);
        self
    }

    /// The continuation that was pending, if the interaction was recorded.
    pub fn pending(&self) -> Option<Continuation> {
        self.interaction.and_then(|interaction| interaction.pending)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn {}, actor {}", self.turn, self.actor)?;
        if let Some(interaction) = self.interaction {
            write!(f, ", {} mode", interaction.mode.label())?;
            match interaction.pending {
                Some(pending) => write!(f, " awaiting {}", pending.label())?,
                None => f.write_str(" with nothing pending")?,
            }
        }
        Ok(())
    }
}

/// Common trait for all game-core errors.
///
/// Implementors derive `thiserror::Error`, classify severity by who is at
/// fault and return a stable `SCREAMING_CASE` code.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{DirectionalVerb, InteractionMode};
    use crate::state::Position;

    #[test]
    fn context_names_the_mismatched_continuation() {
        let interaction = Interaction {
            mode: InteractionMode::Targeted,
            pending: Some(Continuation::Directional {
                verb: DirectionalVerb::Lock,
                actor: EntityId::PLAYER,
                origin: Position::new(2, 3),
            }),
        };
        let context = ErrorContext::new(Turn(4), EntityId::PLAYER).in_interaction(interaction);
        assert_eq!(
            context.to_string(),
            "turn 4, actor #0, targeted mode awaiting a direction to lock"
        );
        assert_eq!(context.pending(), interaction.pending);
    }

    #[test]
    fn action_faults_carry_only_turn_and_actor() {
        let context = ErrorContext::new(Turn(9), EntityId(3));
        assert_eq!(context.to_string(), "turn 9, actor #3");
        assert_eq!(context.pending(), None);
    }
}
