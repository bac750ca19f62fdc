//! State management errors.
//!
//! Errors raised when entity bookkeeping is asked to do something that would
//! break the one-location-per-entity invariant.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ContainerError, EntityId, GridError, Location};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error("entity {0} does not exist")]
    UnknownEntity(EntityId),

    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),

    #[error("entity {0} is not an item")]
    NotAnItem(EntityId),

    #[error("entity {0} is not a fixture")]
    NotAFixture(EntityId),

    #[error("entity {entity} is at {found:?}, expected it {expected}")]
    Misplaced {
        entity: EntityId,
        expected: &'static str,
        found: Location,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Grid(error) => error.severity(),
            Self::Container(error) => error.severity(),
            Self::UnknownEntity(_) => ErrorSeverity::Validation,
            Self::NotAnActor(_)
            | Self::NotAnItem(_)
            | Self::NotAFixture(_)
            | Self::Misplaced { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Grid(error) => error.error_code(),
            Self::Container(error) => error.error_code(),
            Self::UnknownEntity(_) => "STATE_UNKNOWN_ENTITY",
            Self::NotAnActor(_) => "STATE_NOT_AN_ACTOR",
            Self::NotAnItem(_) => "STATE_NOT_AN_ITEM",
            Self::NotAFixture(_) => "STATE_NOT_A_FIXTURE",
            Self::Misplaced { .. } => "STATE_MISPLACED",
        }
    }
}
