//! Doors and windows: entities attached to a tile that can be opened and closed.
//!
//! A fixture's blocking flags and glyph are computed from its open/locked state
//! rather than stored, so a toggle can never leave them out of step.

use strum::Display;

use super::BlockFlags;

/// Why an open/close/lock/unlock request was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum FixtureRejection {
    AlreadyOpen,
    AlreadyClosed,
    Locked,
    /// Lock and unlock only apply to closed fixtures.
    NotClosed,
    NoLock,
    AlreadyLocked,
    NotLocked,
    /// Something stands or lies in the opening.
    Obstructed,
}

impl FixtureRejection {
    /// Player-facing explanation, phrased for a fixture called `noun`.
    pub fn message(self, noun: &str, verb: &str) -> String {
        match self {
            Self::AlreadyOpen => format!("This {noun} is already open."),
            Self::AlreadyClosed => format!("This {noun} is already closed."),
            Self::Locked => format!("This {noun} is locked."),
            Self::NotClosed => format!("You cannot {verb} an open {noun}."),
            Self::NoLock => format!("This {noun} has no lock."),
            Self::AlreadyLocked => format!("This {noun} is already locked."),
            Self::NotLocked => format!("This {noun} is not locked."),
            Self::Obstructed => format!("Something is blocking the {noun}."),
        }
    }
}

/// Capability of fixtures that can be opened and closed.
pub trait Openable {
    /// Noun used in narration ("door", "window").
    fn noun(&self) -> &'static str;

    fn is_open(&self) -> bool;

    fn is_closed(&self) -> bool {
        !self.is_open()
    }

    fn is_locked(&self) -> bool {
        false
    }

    fn has_lock(&self) -> bool {
        false
    }

    /// Whether walking into the closed fixture opens it.
    fn opens_on_bump(&self) -> bool {
        false
    }

    /// Blocking contributed by the fixture in its current state.
    fn blocks(&self) -> BlockFlags;

    fn glyph(&self) -> char;

    fn open(&mut self) -> Result<(), FixtureRejection>;

    fn close(&mut self) -> Result<(), FixtureRejection>;

    fn lock(&mut self) -> Result<(), FixtureRejection> {
        Err(FixtureRejection::NoLock)
    }

    fn unlock(&mut self) -> Result<(), FixtureRejection> {
        Err(FixtureRejection::NoLock)
    }
}

/// A hinged door. Closed doors block movement and sight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Door {
    pub open: bool,
    pub locked: bool,
}

impl Door {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn locked() -> Self {
        Self {
            open: false,
            locked: true,
        }
    }
}

impl Openable for Door {
    fn noun(&self) -> &'static str {
        "door"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn is_locked(&self) -> bool {
        self.locked
    }

    fn has_lock(&self) -> bool {
        true
    }

    fn opens_on_bump(&self) -> bool {
        true
    }

    fn blocks(&self) -> BlockFlags {
        if self.open {
            BlockFlags::empty()
        } else {
            BlockFlags::MOVE | BlockFlags::SIGHT
        }
    }

    fn glyph(&self) -> char {
        if self.open { '-' } else { '+' }
    }

    fn open(&mut self) -> Result<(), FixtureRejection> {
        if self.open {
            return Err(FixtureRejection::AlreadyOpen);
        }
        if self.locked {
            return Err(FixtureRejection::Locked);
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), FixtureRejection> {
        if !self.open {
            return Err(FixtureRejection::AlreadyClosed);
        }
        self.open = false;
        Ok(())
    }

    fn lock(&mut self) -> Result<(), FixtureRejection> {
        if self.open {
            return Err(FixtureRejection::NotClosed);
        }
        if self.locked {
            return Err(FixtureRejection::AlreadyLocked);
        }
        self.locked = true;
        Ok(())
    }

    fn unlock(&mut self) -> Result<(), FixtureRejection> {
        if self.open {
            return Err(FixtureRejection::NotClosed);
        }
        if !self.locked {
            return Err(FixtureRejection::NotLocked);
        }
        self.locked = false;
        Ok(())
    }
}

/// A sash window. Glass never blocks sight; a closed window blocks movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub open: bool,
}

impl Openable for Window {
    fn noun(&self) -> &'static str {
        "window"
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn blocks(&self) -> BlockFlags {
        if self.open {
            BlockFlags::empty()
        } else {
            BlockFlags::MOVE
        }
    }

    fn glyph(&self) -> char {
        if self.open { '*' } else { '=' }
    }

    fn open(&mut self) -> Result<(), FixtureRejection> {
        if self.open {
            return Err(FixtureRejection::AlreadyOpen);
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), FixtureRejection> {
        if !self.open {
            return Err(FixtureRejection::AlreadyClosed);
        }
        self.open = false;
        Ok(())
    }
}

/// Any fixture that can be attached to a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fixture {
    Door(Door),
    Window(Window),
}

impl Fixture {
    pub fn as_openable(&self) -> &dyn Openable {
        match self {
            Self::Door(door) => door,
            Self::Window(window) => window,
        }
    }

    pub fn as_openable_mut(&mut self) -> &mut dyn Openable {
        match self {
            Self::Door(door) => door,
            Self::Window(window) => window,
        }
    }
}
