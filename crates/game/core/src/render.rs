//! Snapshot handed to front-ends after every step.
//!
//! The render model is a plain value: front-ends draw it and never reach back
//! into [`GameState`]. Remembered tiles show terrain and the fixture as it
//! looked when last seen; items and actors are left out since they may have
//! moved since.

use crate::action::{InteractionMode, MenuEntry, MenuVerb, menu_entries};
use crate::state::{EntityId, GameState, Position, Rgb, StateError, Tile, Turn};
use crate::vision::FieldOfView;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileStatus {
    Visible,
    Remembered,
    Unknown,
}

/// A character drawn in a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub symbol: char,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderTile {
    pub status: TileStatus,
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub fixture: Option<Glyph>,
    pub item: Option<Glyph>,
    pub occupant: Option<Glyph>,
}

impl RenderTile {
    fn unknown() -> Self {
        Self {
            status: TileStatus::Unknown,
            glyph: ' ',
            fg: Rgb::BLACK,
            bg: Rgb::BLACK,
            fixture: None,
            item: None,
            occupant: None,
        }
    }

    /// The glyph that should end up on screen: occupant over item over
    /// fixture over terrain.
    pub fn top(&self) -> Glyph {
        self.occupant
            .or(self.item)
            .or(self.fixture)
            .unwrap_or(Glyph {
                symbol: self.glyph,
                color: self.fg,
            })
    }
}

/// Live inventory listing shown while the menu is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub filter: Option<MenuVerb>,
    pub entries: Vec<MenuEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    pub width: u32,
    pub height: u32,
    /// Row-major, `width * height` entries.
    pub tiles: Vec<RenderTile>,
    pub mode: InteractionMode,
    pub menu: Option<MenuView>,
    pub turn: Turn,
    pub player_position: Option<Position>,
}

impl RenderModel {
    /// Builds the model as seen by `viewer` through `fov`.
    pub fn build(
        state: &GameState,
        fov: &FieldOfView,
        mode: InteractionMode,
        viewer: EntityId,
    ) -> Result<Self, StateError> {
        let tiles = state
            .grid
            .iter()
            .map(|(position, tile)| {
                if fov.is_visible(position) {
                    render_tile(state, tile, TileStatus::Visible)
                } else if tile.is_seen() {
                    render_tile(state, tile, TileStatus::Remembered)
                } else {
                    RenderTile::unknown()
                }
            })
            .collect();

        let menu = match mode {
            InteractionMode::Menu(filter) => Some(MenuView {
                filter,
                entries: menu_entries(state, viewer, filter)?,
            }),
            _ => None,
        };

        Ok(Self {
            width: state.grid.width(),
            height: state.grid.height(),
            tiles,
            mode,
            menu,
            turn: state.turn,
            player_position: state.player().and_then(|player| player.position()),
        })
    }

    pub fn tile(&self, position: Position) -> Option<&RenderTile> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        let (x, y) = (position.x as u32, position.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get((y * self.width + x) as usize)
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[RenderTile]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }
}

fn render_tile(state: &GameState, tile: &Tile, status: TileStatus) -> RenderTile {
    let glyph_of = |id: Option<EntityId>| {
        id.and_then(|id| state.entities.get(id)).map(|entity| Glyph {
            symbol: entity.display_glyph(),
            color: entity.color,
        })
    };
    let visible = status == TileStatus::Visible;
    let fixture = if visible {
        glyph_of(tile.fixture())
    } else {
        tile.remembered_fixture()
            .map(|(symbol, color)| Glyph { symbol, color })
    };
    RenderTile {
        status,
        glyph: tile.glyph,
        fg: tile.fg,
        bg: tile.bg,
        fixture,
        item: if visible { glyph_of(tile.item()) } else { None },
        occupant: if visible { glyph_of(tile.occupant()) } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Door, ItemKind};
    use crate::testing::*;
    use crate::vision::compute_visible;

    #[test]
    fn tiles_are_visible_remembered_or_unknown() {
        let mut state = floor_state(6, 1);
        add_player(&mut state, Position::new(0, 0), 10);
        add_item(&mut state, "pistol", ItemKind::Plain, 1, Position::new(2, 0));
        add_door(&mut state, Position::new(3, 0), Door::closed());
        compute_visible(&mut state, Position::new(0, 0), 10);

        let fov = FieldOfView::empty(Position::new(0, 0));
        let model = RenderModel::build(&state, &fov, InteractionMode::Immediate, EntityId::PLAYER)
            .unwrap();

        let remembered = model.tile(Position::new(2, 0)).unwrap();
        assert_eq!(remembered.status, TileStatus::Remembered);
        assert_eq!(remembered.item, None);
        let door = model.tile(Position::new(3, 0)).unwrap();
        assert_eq!(door.fixture.map(|glyph| glyph.symbol), Some('+'));
        assert_eq!(model.tile(Position::new(4, 0)).unwrap().status, TileStatus::Unknown);
        assert_eq!(model.player_position, Some(Position::new(0, 0)));
    }

    #[test]
    fn remembered_doors_keep_the_state_they_were_seen_in() {
        let mut state = floor_state(5, 1);
        add_player(&mut state, Position::new(0, 0), 10);
        let door = add_door(&mut state, Position::new(2, 0), Door::closed());
        compute_visible(&mut state, Position::new(0, 0), 10);

        state
            .entity_mut(door)
            .unwrap()
            .as_openable_mut()
            .unwrap()
            .open()
            .unwrap();
        let dark = FieldOfView::empty(Position::new(0, 0));
        let model = RenderModel::build(&state, &dark, InteractionMode::Immediate, EntityId::PLAYER)
            .unwrap();
        let remembered = model.tile(Position::new(2, 0)).unwrap();
        assert_eq!(remembered.status, TileStatus::Remembered);
        assert_eq!(remembered.top().symbol, '+');

        let fov = compute_visible(&mut state, Position::new(0, 0), 10);
        let model = RenderModel::build(&state, &fov, InteractionMode::Immediate, EntityId::PLAYER)
            .unwrap();
        assert_eq!(model.tile(Position::new(2, 0)).unwrap().top().symbol, '-');
    }

    #[test]
    fn visible_tiles_show_what_they_hold() {
        let mut state = floor_state(4, 1);
        add_player(&mut state, Position::new(0, 0), 10);
        add_item(&mut state, "pistol", ItemKind::Plain, 1, Position::new(1, 0));
        let fov = compute_visible(&mut state, Position::new(0, 0), 5);

        let model = RenderModel::build(&state, &fov, InteractionMode::Immediate, EntityId::PLAYER)
            .unwrap();
        assert_eq!(model.tile(Position::new(0, 0)).unwrap().top().symbol, '@');
        assert!(model.tile(Position::new(1, 0)).unwrap().item.is_some());
        assert_eq!(model.rows().count(), 1);
        assert!(model.menu.is_none());
    }

    #[test]
    fn menu_mode_carries_live_entries() {
        let mut state = floor_state(2, 1);
        add_player(&mut state, Position::new(0, 0), 10);
        let fov = FieldOfView::empty(Position::new(0, 0));

        let model = RenderModel::build(
            &state,
            &fov,
            InteractionMode::Menu(Some(MenuVerb::Drop)),
            EntityId::PLAYER,
        )
        .unwrap();
        let menu = model.menu.unwrap();
        assert_eq!(menu.filter, Some(MenuVerb::Drop));
        assert!(menu.entries.is_empty());
    }
}
