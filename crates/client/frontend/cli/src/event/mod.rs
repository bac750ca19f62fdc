//! Event handling for the CLI client.
//!
//! The event loop polls the keyboard, feeds inputs to the session and
//! redraws after every step.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
