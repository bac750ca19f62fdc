//! Action execution errors.
//!
//! Game-rule refusals are not errors; they surface as [`Refusal::Unmet`] and are
//! narrated. [`ActionError`] is reserved for faults in the model or in how the
//! state machine was driven.

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::StateError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    State(#[from] StateError),

    /// Directional or targeted mode was entered without the data to finish it.
    #[error("no matching continuation ({context})")]
    MissingContinuation { context: ErrorContext },

    /// An action was applied after its checked preconditions stopped holding.
    #[error("{action} no longer satisfies its preconditions ({context})")]
    PreconditionDrift {
        action: &'static str,
        context: ErrorContext,
    },
}

impl ActionError {
    pub(crate) fn drift(action: &'static str, context: ErrorContext) -> Self {
        Self::PreconditionDrift { action, context }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::State(error) => error.severity(),
            Self::MissingContinuation { .. } | Self::PreconditionDrift { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::MissingContinuation { context } | Self::PreconditionDrift { context, .. } => {
                Some(context)
            }
            Self::State(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::State(error) => error.error_code(),
            Self::MissingContinuation { .. } => "ACTION_MISSING_CONTINUATION",
            Self::PreconditionDrift { .. } => "ACTION_PRECONDITION_DRIFT",
        }
    }
}

/// Why an action did not go ahead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// A game rule forbids it; the message is narrated to the actor.
    Unmet(String),
    /// Refused without comment (walking into a wall).
    Silent,
    /// The model is inconsistent.
    Fault(ActionError),
}

impl Refusal {
    pub fn unmet(message: impl Into<String>) -> Self {
        Self::Unmet(message.into())
    }
}

impl From<ActionError> for Refusal {
    fn from(error: ActionError) -> Self {
        Self::Fault(error)
    }
}

impl From<StateError> for Refusal {
    fn from(error: StateError) -> Self {
        Self::Fault(error.into())
    }
}
