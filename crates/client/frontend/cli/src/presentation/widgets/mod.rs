//! Widgets composing the terminal UI.
pub mod footer;
pub mod header;
pub mod inventory;
pub mod map;
pub mod messages;
