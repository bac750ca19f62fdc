//! Content loaders for reading game data from files.
//!
//! Levels and item catalogs are RON, configuration is TOML. Every loader also
//! accepts an in-memory string so built-in content can be parsed the same way.

pub mod config;
pub mod factory;
pub mod item;
pub mod level;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader, ItemTemplate};
pub use level::{Cell, ItemPlacement, LevelLoader, LevelSpec, NpcSpec, PLAYER_NAME};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
