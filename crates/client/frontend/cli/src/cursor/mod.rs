//! Target cursor used while the game waits for a tile.

use game_core::{CardinalDirection, Position};

/// A cursor confined to the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorState {
    pub position: Position,
    width: u32,
    height: u32,
}

impl CursorState {
    /// Places a cursor at `position`, clamped into a `width` x `height` map.
    pub fn new(position: Position, width: u32, height: u32) -> Self {
        let mut cursor = Self {
            position,
            width,
            height,
        };
        cursor.position = cursor.clamp(position);
        cursor
    }

    /// Moves one tile, stopping at the map edge.
    pub fn step(&mut self, direction: CardinalDirection) {
        self.position = self.clamp(direction.step(self.position));
    }

    fn clamp(&self, position: Position) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }
}
