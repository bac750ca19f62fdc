//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let config = ConfigLoader::parse("throw_range = 2\n").unwrap();
        assert_eq!(config.throw_range, 2);
        assert_eq!(config.view_radius, GameConfig::DEFAULT_VIEW_RADIUS);
        assert_eq!(
            config.inventory_capacity,
            GameConfig::DEFAULT_INVENTORY_CAPACITY
        );
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "view_radius = 4\ninventory_capacity = 12\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config, GameConfig::new().with_view_radius(4).with_inventory_capacity(12));
    }

    #[test]
    fn malformed_files_are_rejected() {
        assert!(ConfigLoader::parse("view_radius = \"far\"").is_err());
        assert!(ConfigLoader::load(Path::new("/nonexistent/config.toml")).is_err());
    }
}
