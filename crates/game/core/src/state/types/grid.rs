use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};

use super::{EntityId, Position, SlotKind, TerrainKind, Tile};

/// Errors raised by tile slot bookkeeping.
///
/// All of them mean the caller skipped a legality check, so they are internal faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: u32,
        height: u32,
    },

    #[error("{slot} slot at {position} already holds {current}")]
    OccupiedSlot {
        position: Position,
        slot: SlotKind,
        current: EntityId,
    },

    #[error("{slot} slot at {position} is empty")]
    EmptySlot { position: Position, slot: SlotKind },

    #[error("grid dimensions {width}x{height} exceed the supported maximum")]
    InvalidDimensions { width: u32, height: u32 },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidDimensions { .. } => ErrorSeverity::Validation,
            Self::OutOfBounds { .. } | Self::OccupiedSlot { .. } | Self::EmptySlot { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
            Self::OccupiedSlot { .. } => "GRID_OCCUPIED_SLOT",
            Self::EmptySlot { .. } => "GRID_EMPTY_SLOT",
            Self::InvalidDimensions { .. } => "GRID_INVALID_DIMENSIONS",
        }
    }
}

/// Row-major tile storage, fixed in size for the lifetime of a level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let mut grid = Self::default();
        grid.set_size(width, height)?;
        Ok(grid)
    }

    /// Discards every tile and allocates `width * height` unknown tiles.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        if width > GameConfig::MAX_GRID_DIMENSION || height > GameConfig::MAX_GRID_DIMENSION {
            return Err(GridError::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        self.tiles = vec![Tile::default(); (width as usize) * (height as usize)];
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    fn out_of_bounds(&self, position: Position) -> GridError {
        GridError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        }
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|index| &self.tiles[index])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(move |index| &mut self.tiles[index])
    }

    pub fn try_tile(&self, position: Position) -> Result<&Tile, GridError> {
        self.tile(position).ok_or_else(|| self.out_of_bounds(position))
    }

    pub fn try_tile_mut(&mut self, position: Position) -> Result<&mut Tile, GridError> {
        let error = self.out_of_bounds(position);
        self.tile_mut(position).ok_or(error)
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) -> Result<(), GridError> {
        self.try_tile_mut(position)?.set_terrain(terrain);
        Ok(())
    }

    /// Fills an empty slot.
    pub fn fill_slot(
        &mut self,
        position: Position,
        slot: SlotKind,
        entity: EntityId,
    ) -> Result<(), GridError> {
        let cell = self.try_tile_mut(position)?.slot_mut(slot);
        if let Some(current) = *cell {
            return Err(GridError::OccupiedSlot {
                position,
                slot,
                current,
            });
        }
        *cell = Some(entity);
        Ok(())
    }

    /// Empties a filled slot, returning what was there.
    pub fn clear_slot(&mut self, position: Position, slot: SlotKind) -> Result<EntityId, GridError> {
        self.try_tile_mut(position)?
            .slot_mut(slot)
            .take()
            .ok_or(GridError::EmptySlot { position, slot })
    }

    /// Writes a slot unconditionally, returning the previous value.
    pub(crate) fn replace_slot(
        &mut self,
        position: Position,
        slot: SlotKind,
        entity: Option<EntityId>,
    ) -> Result<Option<EntityId>, GridError> {
        let cell = self.try_tile_mut(position)?.slot_mut(slot);
        Ok(std::mem::replace(cell, entity))
    }

    /// Iterates over every tile together with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        let width = self.width.max(1) as usize;
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, tile)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_size_allocates_unknown_tiles() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.iter().count(), 12);
        assert!(grid.iter().all(|(_, tile)| tile.terrain == TerrainKind::Unknown));
        assert!(grid.contains(Position::new(3, 2)));
        assert!(!grid.contains(Position::new(4, 2)));
        assert!(!grid.contains(Position::new(-1, 0)));
    }

    #[test]
    fn set_size_rejects_oversized_grids() {
        let error = Grid::new(GameConfig::MAX_GRID_DIMENSION + 1, 1).unwrap_err();
        assert_eq!(error.error_code(), "GRID_INVALID_DIMENSIONS");
    }

    #[test]
    fn filling_a_full_slot_is_an_internal_fault() {
        let mut grid = Grid::new(2, 2).unwrap();
        let position = Position::new(1, 1);
        grid.fill_slot(position, SlotKind::Item, EntityId(3)).unwrap();

        let error = grid
            .fill_slot(position, SlotKind::Item, EntityId(4))
            .unwrap_err();
        assert_eq!(
            error,
            GridError::OccupiedSlot {
                position,
                slot: SlotKind::Item,
                current: EntityId(3)
            }
        );
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert_eq!(grid.tile(position).unwrap().item(), Some(EntityId(3)));
    }

    #[test]
    fn clearing_an_empty_slot_fails() {
        let mut grid = Grid::new(2, 2).unwrap();
        let error = grid
            .clear_slot(Position::new(0, 0), SlotKind::Occupant)
            .unwrap_err();
        assert!(matches!(error, GridError::EmptySlot { .. }));
    }

    #[test]
    fn slot_operations_reject_positions_off_the_grid() {
        let mut grid = Grid::new(2, 2).unwrap();
        let error = grid
            .fill_slot(Position::new(2, 0), SlotKind::Fixture, EntityId(1))
            .unwrap_err();
        assert!(matches!(error, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn set_terrain_resets_intrinsic_blocking() {
        let mut grid = Grid::new(1, 1).unwrap();
        let origin = Position::ORIGIN;
        grid.set_terrain(origin, TerrainKind::Desk).unwrap();
        let tile = grid.tile(origin).unwrap();
        assert!(tile.blocks.blocks_move());
        assert!(!tile.blocks.blocks_sight());
        assert_eq!(tile.glyph, 'D');
    }
}
