//! Level loader.
//!
//! A level is an ASCII picture of the terrain plus the entities placed on it.
//! Building one drives the same placement API the game itself uses, so a
//! malformed level fails with the grid's own errors.

use std::path::Path;

use anyhow::Context;
use game_core::{
    ActorState, Behavior, Door, Entity, Fixture, GameConfig, GameState, Grid, Position,
    ReportAudience, Rgb, TerrainKind, Window,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{ItemCatalog, LoadResult, read_file};

/// Name given to the player character.
pub const PLAYER_NAME: &str = "Bob Smith";

const NPC_COLOR: Rgb = Rgb(220, 40, 40);
const FIXTURE_COLOR: Rgb = Rgb(230, 200, 120);

/// What a single legend character stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub terrain: TerrainKind,
    pub fixture: Option<Fixture>,
}

impl Cell {
    /// Decodes a legend character.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        let (terrain, fixture) = match glyph {
            ' ' => (TerrainKind::Unknown, None),
            '#' => (TerrainKind::Wall, None),
            'D' => (TerrainKind::Desk, None),
            'W' => (TerrainKind::Window, Some(Fixture::Window(Window::default()))),
            '+' => (TerrainKind::Door, Some(Fixture::Door(Door::closed()))),
            'L' => (TerrainKind::Door, Some(Fixture::Door(Door::locked()))),
            '"' => (TerrainKind::Grass, None),
            '.' => (TerrainKind::Floor, None),
            _ => return None,
        };
        Some(Self { terrain, fixture })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPlacement {
    /// Key of an [`crate::ItemTemplate`].
    pub template: String,
    pub at: Position,
}

fn default_npc_radius() -> u32 {
    10
}

fn default_npc_capacity() -> u32 {
    10
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcSpec {
    pub name: String,
    pub at: Position,
    #[serde(default)]
    pub behavior: Behavior,
    #[serde(default)]
    pub descriptor: Option<String>,
    #[serde(default = "default_npc_radius")]
    pub view_radius: u32,
    #[serde(default = "default_npc_capacity")]
    pub capacity: u32,
}

/// Level file structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// One string per row; short rows are padded with unknown terrain.
    pub rows: Vec<String>,
    pub entry: Position,
    #[serde(default)]
    pub items: Vec<ItemPlacement>,
    #[serde(default)]
    pub npcs: Vec<NpcSpec>,
}

impl LevelSpec {
    /// Builds a playable state: terrain, fixtures, the player at the entry
    /// point, then items and NPCs.
    pub fn build(&self, catalog: &ItemCatalog, config: &GameConfig) -> LoadResult<GameState> {
        if self.rows.len() as u32 > self.height {
            anyhow::bail!(
                "Level has {} rows but a height of {}",
                self.rows.len(),
                self.height
            );
        }
        let grid = Grid::new(self.width, self.height).context("Invalid level dimensions")?;
        let mut state = GameState::new(grid);

        for (y, row) in self.rows.iter().enumerate() {
            if row.chars().count() as u32 > self.width {
                anyhow::bail!("Row {} is wider than the level width {}", y, self.width);
            }
            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let cell = Cell::from_glyph(glyph).ok_or_else(|| {
                    anyhow::anyhow!("Unknown legend character {:?} at {}", glyph, position)
                })?;
                state.grid.set_terrain(position, cell.terrain)?;
                if let Some(fixture) = cell.fixture {
                    let id = state.spawn(Entity::fixture(fixture).with_color(FIXTURE_COLOR));
                    state.attach_fixture(position, id)?;
                }
            }
        }

        let player = Entity::actor(
            PLAYER_NAME,
            ActorState::new(config.view_radius, config.inventory_capacity)
                .with_descriptor("male human"),
        )
        .proper()
        .with_report(ReportAudience::Player);
        let player = state.spawn_player(player);
        state
            .place_occupant(self.entry, player)
            .with_context(|| format!("Cannot place the player at {}", self.entry))?;

        for placement in &self.items {
            let template = catalog
                .get(&placement.template)
                .ok_or_else(|| anyhow::anyhow!("Unknown item template '{}'", placement.template))?;
            let id = state.spawn(template.instantiate());
            state
                .place_item(placement.at, id)
                .with_context(|| format!("Cannot place {} at {}", template.name, placement.at))?;
        }

        for npc in &self.npcs {
            let mut actor = ActorState::new(npc.view_radius, npc.capacity).with_behavior(npc.behavior);
            if let Some(descriptor) = &npc.descriptor {
                actor = actor.with_descriptor(descriptor.clone());
            }
            let id = state.spawn(Entity::actor(npc.name.clone(), actor).with_color(NPC_COLOR));
            state
                .place_occupant(npc.at, id)
                .with_context(|| format!("Cannot place {} at {}", npc.name, npc.at))?;
        }

        Ok(state)
    }
}

/// Loader for levels from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelSpec> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<LevelSpec> {
        let level: LevelSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::ItemLoader;
    use game_core::{EntityId, Location};

    fn catalog() -> ItemCatalog {
        ItemLoader::parse(crate::BUILTIN_ITEMS).unwrap()
    }

    #[test]
    fn legend_covers_every_terrain() {
        assert_eq!(Cell::from_glyph('#').unwrap().terrain, TerrainKind::Wall);
        assert_eq!(
            Cell::from_glyph('L').unwrap().fixture,
            Some(Fixture::Door(Door::locked()))
        );
        assert_eq!(Cell::from_glyph('"').unwrap().terrain, TerrainKind::Grass);
        assert!(Cell::from_glyph('x').is_none());
    }

    #[test]
    fn builtin_level_builds() {
        let level = LevelLoader::parse(crate::BUILTIN_LEVEL).unwrap();
        let config = GameConfig::default();
        let state = level.build(&catalog(), &config).unwrap();

        assert_eq!(state.grid.width(), level.width);
        let player = state.player().unwrap();
        assert_eq!(player.name, PLAYER_NAME);
        assert_eq!(player.location(), Location::Standing(level.entry));
        assert_eq!(
            player.as_actor().unwrap().inventory.max_capacity(),
            config.inventory_capacity
        );
        assert_eq!(state.entities.actor_ids().count(), 1 + level.npcs.len());
        for placement in &level.items {
            assert!(state.item_at(placement.at).is_some());
        }
    }

    #[test]
    fn small_level_places_fixtures_and_pads_rows() {
        let level = LevelLoader::parse(
            r##"(
                width: 4,
                height: 2,
                rows: ["#+W", "..L."],
                entry: (x: 0, y: 1),
            )"##,
        )
        .unwrap();
        let state = level.build(&ItemCatalog::default(), &GameConfig::default()).unwrap();

        assert_eq!(
            state.grid.tile(Position::new(3, 0)).unwrap().terrain,
            TerrainKind::Unknown
        );
        assert!(state.fixture_at(Position::new(1, 0)).is_some());
        assert!(state.fixture_at(Position::new(2, 0)).is_some());
        let locked = state.fixture_at(Position::new(2, 1)).unwrap();
        assert!(state.entity(locked).unwrap().as_openable().unwrap().is_locked());
        assert_eq!(state.occupant_at(Position::new(0, 1)), Some(EntityId::PLAYER));
    }

    #[test]
    fn bad_levels_are_reported() {
        let unknown_item = LevelSpec {
            name: String::new(),
            width: 2,
            height: 1,
            rows: vec!["..".into()],
            entry: Position::new(0, 0),
            items: vec![ItemPlacement {
                template: "anvil".into(),
                at: Position::new(1, 0),
            }],
            npcs: Vec::new(),
        };
        let error = unknown_item
            .build(&catalog(), &GameConfig::default())
            .unwrap_err();
        assert!(error.to_string().contains("Unknown item template 'anvil'"));

        let off_grid = LevelSpec {
            entry: Position::new(5, 5),
            items: Vec::new(),
            ..unknown_item.clone()
        };
        assert!(off_grid.build(&catalog(), &GameConfig::default()).is_err());

        let too_wide = LevelSpec {
            rows: vec!["...".into()],
            entry: Position::new(0, 0),
            items: Vec::new(),
            ..unknown_item
        };
        assert!(too_wide.build(&catalog(), &GameConfig::default()).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.ron");
        std::fs::write(&path, r#"(width: 1, height: 1, rows: ["."], entry: (x: 0, y: 0))"#)
            .unwrap();
        let level = LevelLoader::load(&path).unwrap();
        assert_eq!(level.rows, vec![".".to_string()]);
        assert!(level.npcs.is_empty());
    }
}
