//! UI-only state layered over the session.

use game_core::{InteractionMode, Position};

use crate::cursor::CursorState;

/// What the terminal tracks that the game does not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Target cursor, present only while the game waits for a tile.
    pub cursor: Option<CursorState>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the cursor in line with the session's mode: it appears on the
    /// player when targeting starts and disappears when targeting ends.
    pub fn follow_mode(
        &mut self,
        mode: InteractionMode,
        player: Option<Position>,
        width: u32,
        height: u32,
    ) {
        match mode {
            InteractionMode::Targeted => {
                if self.cursor.is_none() {
                    let origin = player.unwrap_or(Position::new(0, 0));
                    self.cursor = Some(CursorState::new(origin, width, height));
                }
            }
            _ => self.cursor = None,
        }
    }

    pub fn cursor_position(&self) -> Option<Position> {
        self.cursor.map(|cursor| cursor.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CardinalDirection;

    #[test]
    fn cursor_lives_only_while_targeting() {
        let mut state = AppState::new();
        let player = Some(Position::new(2, 2));

        state.follow_mode(InteractionMode::Targeted, player, 5, 5);
        assert_eq!(state.cursor_position(), player);

        if let Some(cursor) = state.cursor.as_mut() {
            cursor.step(CardinalDirection::East);
        }
        state.follow_mode(InteractionMode::Targeted, player, 5, 5);
        assert_eq!(state.cursor_position(), Some(Position::new(3, 2)));

        state.follow_mode(InteractionMode::Immediate, player, 5, 5);
        assert_eq!(state.cursor_position(), None);
    }
}
