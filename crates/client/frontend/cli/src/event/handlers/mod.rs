//! Event handler implementations for [`EventLoop`](super::EventLoop).
//!
//! - `input`: keyboard handling and session submission
//! - `rendering`: terminal rendering

mod input;
mod rendering;
