//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, configuration and the frontend trait that both
//! the CLI and future graphical clients can reuse.
pub mod config;
pub mod frontend;
pub mod message;

pub use config::{FrameConfig, FrontendConfig, MessageConfig};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
