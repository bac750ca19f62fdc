//! Turn providers for non-player actors.

pub mod npc;

pub use npc::{IdleBehavior, NpcBehavior, WanderBehavior, behavior_for};
