use bitflags::bitflags;
use strum::{Display, EnumIter};

use super::EntityId;

bitflags! {
    /// What a tile, fixture or actor obstructs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BlockFlags: u8 {
        const MOVE  = 1 << 0;
        const SIGHT = 1 << 1;
    }
}

impl BlockFlags {
    #[inline]
    pub fn blocks_move(self) -> bool {
        self.contains(Self::MOVE)
    }

    #[inline]
    pub fn blocks_sight(self) -> bool {
        self.contains(Self::SIGHT)
    }
}

/// Terrain category of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TerrainKind {
    #[default]
    Unknown,
    Wall,
    Desk,
    Window,
    Door,
    Grass,
    Floor,
}

impl TerrainKind {
    /// Intrinsic blocking a freshly assigned tile of this kind carries.
    ///
    /// Door and window tiles are open ground; the attached fixture decides.
    pub const fn default_blocks(self) -> BlockFlags {
        match self {
            Self::Unknown | Self::Wall => BlockFlags::MOVE.union(BlockFlags::SIGHT),
            Self::Desk => BlockFlags::MOVE,
            Self::Window | Self::Door | Self::Grass | Self::Floor => BlockFlags::empty(),
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Unknown | Self::Window | Self::Door => ' ',
            Self::Wall => '#',
            Self::Desk => 'D',
            Self::Grass => '"',
            Self::Floor => '.',
        }
    }

    /// Default (foreground, background) colors.
    pub const fn palette(self) -> (Rgb, Rgb) {
        match self {
            Self::Unknown => (Rgb::BLACK, Rgb::BLACK),
            Self::Wall => (Rgb::new(96, 96, 96), Rgb::new(48, 48, 48)),
            Self::Desk => (Rgb::new(139, 90, 43), Rgb::new(40, 28, 16)),
            Self::Window => (Rgb::new(135, 206, 235), Rgb::new(20, 20, 28)),
            Self::Door => (Rgb::new(160, 110, 60), Rgb::new(20, 20, 20)),
            Self::Grass => (Rgb::new(60, 160, 60), Rgb::new(10, 40, 10)),
            Self::Floor => (Rgb::new(150, 150, 150), Rgb::new(20, 20, 20)),
        }
    }

    /// Short description used when examining a tile.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Unknown => "nothing you can make out",
            Self::Wall => "a wall",
            Self::Desk => "a desk",
            Self::Window => "a window frame",
            Self::Door => "a doorway",
            Self::Grass => "some grass",
            Self::Floor => "laminate flooring",
        }
    }
}

/// 24-bit display color. Render-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);
    pub const WHITE: Self = Self(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Names one of the three per-tile entity slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SlotKind {
    Fixture,
    Item,
    Occupant,
}

/// A single grid cell.
///
/// Entity slots only hold ids; the entities themselves live in
/// [`crate::EntitiesState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub terrain: TerrainKind,
    /// Intrinsic blocking; consulted only when no fixture or occupant is present.
    pub blocks: BlockFlags,
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    seen: bool,
    /// Fixture glyph and color as last seen, kept while the tile is out of view.
    remembered_fixture: Option<(char, Rgb)>,
    fixture: Option<EntityId>,
    item: Option<EntityId>,
    occupant: Option<EntityId>,
}

impl Tile {
    pub fn new(terrain: TerrainKind) -> Self {
        let (fg, bg) = terrain.palette();
        Self {
            terrain,
            blocks: terrain.default_blocks(),
            glyph: terrain.glyph(),
            fg,
            bg,
            seen: false,
            remembered_fixture: None,
            fixture: None,
            item: None,
            occupant: None,
        }
    }

    /// Reassigns terrain, resetting blocking, glyph and colors to the kind's defaults.
    pub fn set_terrain(&mut self, terrain: TerrainKind) {
        let (fg, bg) = terrain.palette();
        self.terrain = terrain;
        self.blocks = terrain.default_blocks();
        self.glyph = terrain.glyph();
        self.fg = fg;
        self.bg = bg;
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }

    /// Records the tile as seen together with how its fixture looked. There is
    /// no way to forget.
    pub fn remember(&mut self, fixture: Option<(char, Rgb)>) {
        self.seen = true;
        self.remembered_fixture = fixture;
    }

    pub fn remembered_fixture(&self) -> Option<(char, Rgb)> {
        self.remembered_fixture
    }

    pub fn fixture(&self) -> Option<EntityId> {
        self.fixture
    }

    pub fn item(&self) -> Option<EntityId> {
        self.item
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn slot(&self, kind: SlotKind) -> Option<EntityId> {
        match kind {
            SlotKind::Fixture => self.fixture,
            SlotKind::Item => self.item,
            SlotKind::Occupant => self.occupant,
        }
    }

    pub(crate) fn slot_mut(&mut self, kind: SlotKind) -> &mut Option<EntityId> {
        match kind {
            SlotKind::Fixture => &mut self.fixture,
            SlotKind::Item => &mut self.item,
            SlotKind::Occupant => &mut self.occupant,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TerrainKind::Unknown)
    }
}
