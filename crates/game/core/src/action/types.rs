//! Core action types: inputs, interaction modes and pending continuations.

use strum::{Display, EnumIter};

use crate::state::{EntityId, Position};

// ============================================================================
// Cardinal Direction
// ============================================================================

/// One of the eight king-move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CardinalDirection {
    /// Returns the offset (dx, dy) for this direction.
    ///
    /// Coordinate system: y grows downward (south), x grows rightward (east).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Returns all 8 directions, clockwise from north.
    pub fn all() -> [CardinalDirection; 8] {
        [
            Self::North,
            Self::NorthEast,
            Self::East,
            Self::SouthEast,
            Self::South,
            Self::SouthWest,
            Self::West,
            Self::NorthWest,
        ]
    }

    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|direction| direction.offset() == (dx, dy))
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// The next direction clockwise.
    pub fn clockwise(self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|d| *d == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn step(self, from: Position) -> Position {
        let (dx, dy) = self.offset();
        from.offset(dx, dy)
    }
}

// ============================================================================
// Verbs
// ============================================================================

/// Verbs that act on something in an adjacent tile, chosen by direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirectionalVerb {
    Get,
    Open,
    Close,
    Lock,
    Unlock,
}

impl DirectionalVerb {
    /// Verb phrase used in prompts ("Which direction to pick up in?").
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Get => "pick up",
            Self::Open => "open",
            Self::Close => "close",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }
}

/// Verbs applied to an inventory entry picked from a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum MenuVerb {
    Use,
    Drop,
    Throw,
    Consume,
    Equip,
    Wear,
}

// ============================================================================
// Input
// ============================================================================

/// Abstract input delivered by a front-end. Raw keys never reach the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// Movement delta; in directional mode it answers the pending prompt.
    Move(CardinalDirection),
    Open,
    Close,
    Lock,
    Unlock,
    Get,
    Wait,
    Examine,
    ShowInventory(Option<MenuVerb>),
    HideInventory,
    InventorySelect(char),
    Target(Position),
    Cancel,
    Exit,
}

// ============================================================================
// Interaction Mode & Continuations
// ============================================================================

/// What the state machine expects from the next input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionMode {
    /// The next input is a complete command.
    #[default]
    Immediate,
    /// Waiting for a direction to complete a pending action.
    Directional,
    /// Waiting for a target tile.
    Targeted,
    /// Waiting for an inventory selection, optionally filtered by a verb.
    Menu(Option<MenuVerb>),
}

impl InteractionMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Directional => "directional",
            Self::Targeted => "targeted",
            Self::Menu(_) => "menu",
        }
    }
}

/// Data captured when an action has to wait for more input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Continuation {
    /// Completed by a direction from `origin`.
    Directional {
        verb: DirectionalVerb,
        actor: EntityId,
        origin: Position,
    },
    /// Completed by a target tile, which is then described.
    Examine { actor: EntityId, origin: Position },
    /// Completed by a target tile onto which `item` is thrown.
    Throw {
        actor: EntityId,
        item: EntityId,
        origin: Position,
    },
}

impl Continuation {
    pub fn actor(&self) -> EntityId {
        match *self {
            Self::Directional { actor, .. }
            | Self::Examine { actor, .. }
            | Self::Throw { actor, .. } => actor,
        }
    }

    /// Mode in which this continuation is waiting.
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Directional { .. } => InteractionMode::Directional,
            Self::Examine { .. } | Self::Throw { .. } => InteractionMode::Targeted,
        }
    }

    /// What the continuation is waiting for, for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Directional { verb, .. } => match verb {
                DirectionalVerb::Get => "a direction to pick up",
                DirectionalVerb::Open => "a direction to open",
                DirectionalVerb::Close => "a direction to close",
                DirectionalVerb::Lock => "a direction to lock",
                DirectionalVerb::Unlock => "a direction to unlock",
            },
            Self::Examine { .. } => "a tile to examine",
            Self::Throw { .. } => "a tile to throw at",
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of feeding one input to the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub turn_elapsed: bool,
    pub mode: InteractionMode,
    pub continuation: Option<Continuation>,
}

impl Resolution {
    /// Back to immediate mode, with or without spending the turn.
    pub fn immediate(turn_elapsed: bool) -> Self {
        Self {
            turn_elapsed,
            mode: InteractionMode::Immediate,
            continuation: None,
        }
    }

    /// No turn spent; keep waiting in `mode`.
    pub fn stay(mode: InteractionMode, continuation: Option<Continuation>) -> Self {
        Self {
            turn_elapsed: false,
            mode,
            continuation,
        }
    }

    /// No turn spent; wait for the input `continuation` needs.
    pub fn pending(continuation: Continuation) -> Self {
        Self::stay(continuation.mode(), Some(continuation))
    }
}

/// Result of a transition: either keep going or leave the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue(Resolution),
    Exit,
}

impl Step {
    pub fn resolution(self) -> Option<Resolution> {
        match self {
            Self::Continue(resolution) => Some(resolution),
            Self::Exit => None,
        }
    }
}
