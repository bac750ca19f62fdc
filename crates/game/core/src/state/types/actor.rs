use strum::Display;

use super::Container;

/// What drives an actor between player turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Behavior {
    /// Driven by player input.
    #[default]
    Player,
    /// Takes its turn without doing anything.
    Idle,
    /// Walks around, turning whenever the way ahead is blocked.
    Wander,
}

/// State specific to actors: sight, carried items and control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    pub view_radius: u32,
    pub inventory: Container,
    pub behavior: Behavior,
    /// Short description such as "male human".
    pub descriptor: Option<String>,
}

impl ActorState {
    pub fn new(view_radius: u32, capacity: u32) -> Self {
        Self {
            view_radius,
            inventory: Container::new(capacity),
            behavior: Behavior::Player,
            descriptor: None,
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = Some(descriptor.into());
        self
    }
}
