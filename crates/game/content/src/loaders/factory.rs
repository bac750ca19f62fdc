//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, GameState};

use crate::loaders::{ConfigLoader, ItemCatalog, ItemLoader, LevelLoader, LevelSpec, LoadResult};

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── levels/
///     └── office.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or the defaults when the
    /// directory has none.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`, or the built-in catalog when
    /// the directory has none.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        if !path.exists() {
            return crate::builtin_catalog();
        }
        ItemLoader::load(&path)
    }

    /// Load a level from `levels/{name}.ron`.
    pub fn load_level(&self, name: &str) -> LoadResult<LevelSpec> {
        let path = self.data_dir.join("levels").join(format!("{}.ron", name));
        LevelLoader::load(&path)
    }

    /// Loads everything needed to start playing `level`.
    pub fn build_level(&self, level: &str) -> LoadResult<(GameConfig, GameState)> {
        let config = self.load_config()?;
        let catalog = self.load_items()?;
        let state = self.load_level(level)?.build(&catalog, &config)?;
        Ok((config, state))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
