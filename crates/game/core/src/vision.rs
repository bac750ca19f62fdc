//! Field of view.
//!
//! Light is diffused from the origin with `gruid_rl`'s [`FOV`]: each step costs
//! one, and leaving a sight-blocking tile costs more than the whole reach, so
//! walls that bound a visible area are lit while whatever stands behind them
//! stays dark. A floor tile only counts as visible when the origin is also lit
//! from it, which makes the relation symmetric. The result is a pure function
//! of the grid, origin and radius.

use gruid_core::{Point, Range};
use gruid_rl::fov::{FOV, Lighter};

use crate::config::GameConfig;
use crate::state::{GameState, Position};

/// Tiles visible from one origin, stored over the radius square clipped to the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOfView {
    origin: Position,
    radius: u32,
    min: Position,
    width: u32,
    height: u32,
    visible: Vec<bool>,
}

impl FieldOfView {
    /// An empty view that sees nothing.
    pub fn empty(origin: Position) -> Self {
        Self {
            origin,
            radius: 0,
            min: origin,
            width: 0,
            height: 0,
            visible: Vec::new(),
        }
    }

    /// Computes the visible set without touching the state.
    pub fn compute(state: &GameState, origin: Position, radius: u32) -> Self {
        let grid = &state.grid;
        if !grid.contains(origin) {
            return Self::empty(origin);
        }

        // Nothing past the grid diagonal can be lit anyway.
        let reach = radius.min(2 * GameConfig::MAX_GRID_DIMENSION) as i32;
        let min_x = origin.x.saturating_sub(reach).max(0);
        let min_y = origin.y.saturating_sub(reach).max(0);
        let max_x = origin.x.saturating_add(reach).min(grid.width() as i32 - 1);
        let max_y = origin.y.saturating_add(reach).min(grid.height() as i32 - 1);
        let width = (max_x - min_x + 1) as u32;
        let height = (max_y - min_y + 1) as u32;

        let mut fov = Self {
            origin,
            radius,
            min: Position::new(min_x, min_y),
            width,
            height,
            visible: vec![false; width as usize * height as usize],
        };
        fov.mark(origin);

        let mut forward = grid_fov(state);
        let mut backward = grid_fov(state);
        let source = to_point(origin);
        forward.vision_map(&SightLighter::new(state, source, reach), source, reach);

        for node in forward.iter_lighted() {
            let position = Position::new(node.pos.x, node.pos.y);
            if position == origin || !fov.within_radius(position) {
                continue;
            }
            if state.effective_blocks_sight(position) {
                fov.mark(position);
                continue;
            }
            let target = node.pos;
            backward.vision_map(&SightLighter::new(state, target, reach), target, reach);
            if backward.at(source).is_some() {
                fov.mark(position);
            }
        }
        fov
    }

    fn index(&self, position: Position) -> Option<usize> {
        let dx = position.x - self.min.x;
        let dy = position.y - self.min.y;
        if dx < 0 || dy < 0 || dx as u32 >= self.width || dy as u32 >= self.height {
            return None;
        }
        Some(dy as usize * self.width as usize + dx as usize)
    }

    fn within_radius(&self, position: Position) -> bool {
        let radius = i64::from(self.radius);
        self.origin.distance_squared(position) <= radius * radius
    }

    fn mark(&mut self, position: Position) {
        if !self.within_radius(position) {
            return;
        }
        if let Some(index) = self.index(position) {
            self.visible[index] = true;
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position)
            .is_some_and(|index| self.visible[index])
    }

    /// Visible positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width.max(1) as usize;
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(move |(index, _)| {
                self.min
                    .offset((index % width) as i32, (index / width) as i32)
            })
    }

    pub fn len(&self) -> usize {
        self.visible.iter().filter(|visible| **visible).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes the field of view and records every visible tile as seen, along
/// with how its fixture looks right now.
pub fn compute_visible(state: &mut GameState, origin: Position, radius: u32) -> FieldOfView {
    let fov = FieldOfView::compute(state, origin, radius);
    for position in fov.iter() {
        let fixture = state
            .grid
            .tile(position)
            .and_then(|tile| tile.fixture())
            .and_then(|id| state.entities.get(id))
            .map(|entity| (entity.display_glyph(), entity.color));
        if let Some(tile) = state.grid.tile_mut(position) {
            tile.remember(fixture);
        }
    }
    fov
}

/// Whether a thrown object can travel from `from` to `to`.
///
/// Walks a Bresenham line; every tile strictly between the endpoints must be
/// free of movement blockers.
pub fn has_clear_path(state: &GameState, from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut current = from;

    while current != to {
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
        if current != to && state.effective_blocks_move(current) {
            return false;
        }
    }
    true
}

/// Light cost between neighbouring tiles as seen from `source`.
struct SightLighter<'a> {
    state: &'a GameState,
    source: Point,
    opaque: i32,
}

impl<'a> SightLighter<'a> {
    fn new(state: &'a GameState, source: Point, reach: i32) -> Self {
        Self {
            state,
            source,
            opaque: reach + 1,
        }
    }
}

impl Lighter for SightLighter<'_> {
    fn cost(&self, from: Point, _to: Point) -> i32 {
        if from != self.source && self.state.effective_blocks_sight(Position::new(from.x, from.y)) {
            self.opaque
        } else {
            1
        }
    }
}

fn grid_fov(state: &GameState) -> FOV {
    FOV::new(Range::new(
        0,
        0,
        state.grid.width() as i32,
        state.grid.height() as i32,
    ))
}

fn to_point(position: Position) -> Point {
    Point::new(position.x, position.y)
}
