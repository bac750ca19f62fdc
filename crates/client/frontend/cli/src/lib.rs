//! Terminal frontend for the citadel game.
//!
//! Wraps a [`runtime::Session`] in a ratatui interface: keys become
//! [`game_core::InputEvent`]s, narration lands in the message panel and the
//! render model is redrawn after every step.
mod app;
pub mod config;
mod cursor;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, ContentSource, UiConfig};
pub use client_frontend_core::FrontendConfig;
pub use logging::setup_logging;
