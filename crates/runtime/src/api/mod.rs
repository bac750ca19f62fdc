//! Types downstream clients interact with.
pub mod errors;

pub use errors::{Result, RuntimeError};
