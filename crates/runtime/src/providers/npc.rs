//! NPC behaviors.
//!
//! A behavior turns the game state into an [`InputEvent`] for its NPC, which
//! is then resolved by the same state machine that handles the player. NPCs
//! therefore obey exactly the player's movement and interaction rules.

use game_core::{Behavior, CardinalDirection, EntityId, GameState, InputEvent};

/// Decides what one NPC does on its turn.
pub trait NpcBehavior: Send + Sync {
    /// Returns the behavior name for logging and debugging.
    fn name(&self) -> &'static str;

    /// Input for this turn, or `None` to pass.
    fn decide(&mut self, actor: EntityId, state: &GameState) -> Option<InputEvent>;

    /// Told whether the decided input actually spent the turn.
    fn outcome(&mut self, _acted: bool) {}
}

/// Stands still forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleBehavior;

impl NpcBehavior for IdleBehavior {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn decide(&mut self, _actor: EntityId, _state: &GameState) -> Option<InputEvent> {
        None
    }
}

/// Walks in a straight line, turning clockwise whenever the way is blocked.
#[derive(Debug, Clone, Copy)]
pub struct WanderBehavior {
    heading: CardinalDirection,
}

impl WanderBehavior {
    pub fn new(heading: CardinalDirection) -> Self {
        Self { heading }
    }

    pub fn heading(&self) -> CardinalDirection {
        self.heading
    }
}

impl Default for WanderBehavior {
    fn default() -> Self {
        Self::new(CardinalDirection::North)
    }
}

impl NpcBehavior for WanderBehavior {
    fn name(&self) -> &'static str {
        "wander"
    }

    fn decide(&mut self, _actor: EntityId, _state: &GameState) -> Option<InputEvent> {
        Some(InputEvent::Move(self.heading))
    }

    fn outcome(&mut self, acted: bool) {
        if !acted {
            self.heading = self.heading.clockwise();
        }
    }
}

/// Default behavior for an actor's behavior tag. Player-driven actors get none.
pub fn behavior_for(tag: Behavior) -> Option<Box<dyn NpcBehavior>> {
    match tag {
        Behavior::Player => None,
        Behavior::Idle => Some(Box::new(IdleBehavior)),
        Behavior::Wander => Some(Box::new(WanderBehavior::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wanderer_turns_only_after_a_failed_step() {
        let mut wander = WanderBehavior::default();
        wander.outcome(true);
        assert_eq!(wander.heading(), CardinalDirection::North);
        wander.outcome(false);
        assert_eq!(wander.heading(), CardinalDirection::NorthEast);
    }

    #[test]
    fn player_tag_has_no_behavior() {
        assert!(behavior_for(Behavior::Player).is_none());
        assert_eq!(behavior_for(Behavior::Idle).unwrap().name(), "idle");
        assert_eq!(behavior_for(Behavior::Wander).unwrap().name(), "wander");
    }
}
