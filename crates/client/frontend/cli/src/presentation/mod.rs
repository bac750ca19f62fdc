//! Terminal presentation layer.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use terminal::{TerminalGuard, Tui};
pub use theme::RatatuiTheme;
pub use ui::{RenderContext, render};
