//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from action resolution and the state model so clients can
//! bubble them up with consistent context.
use game_core::{ActionError, ErrorSeverity, GameError, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires a game state before building")]
    MissingState,

    #[error("game state has no player entity")]
    MissingPlayer,

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingState | Self::MissingPlayer | Self::Content(_) => ErrorSeverity::Fatal,
            Self::Action(error) => error.severity(),
            Self::State(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingState => "RUNTIME_MISSING_STATE",
            Self::MissingPlayer => "RUNTIME_MISSING_PLAYER",
            Self::Content(_) => "RUNTIME_CONTENT",
            Self::Action(error) => error.error_code(),
            Self::State(error) => error.error_code(),
        }
    }
}
