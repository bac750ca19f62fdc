//! Turn driver for the interaction core.
//!
//! This crate wires the player's input, the NPC behaviors and the field of
//! view into a single synchronous loop. Front-ends embed a [`Session`], feed
//! it abstract inputs and read back narration and a render model.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the turn driver and its builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`providers`] decides what each NPC does on its turn
pub mod api;
pub mod providers;
pub mod session;

pub use api::{Result, RuntimeError};
pub use providers::{IdleBehavior, NpcBehavior, WanderBehavior, behavior_for};
pub use session::{Session, SessionBuilder, StepOutcome};
