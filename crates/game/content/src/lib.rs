//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Levels (ASCII terrain plus item and NPC placement, RON)
//! - Item catalogs (RON)
//! - Game configuration (TOML)
//!
//! A built-in level and catalog are compiled in so the game runs without a
//! data directory.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    Cell, ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, ItemPlacement, ItemTemplate,
    LevelLoader, LevelSpec, LoadResult, NpcSpec, PLAYER_NAME,
};

/// The built-in office level, in level RON format.
pub const BUILTIN_LEVEL: &str = include_str!("../data/levels/office.ron");

/// The built-in item catalog, in catalog RON format.
pub const BUILTIN_ITEMS: &str = include_str!("../data/items.ron");

/// The default configuration file shipped with the game.
pub const BUILTIN_CONFIG: &str = include_str!("../data/config.toml");

#[cfg(feature = "loaders")]
pub fn builtin_catalog() -> LoadResult<ItemCatalog> {
    ItemLoader::parse(BUILTIN_ITEMS)
}

/// Builds the built-in level with `config`.
#[cfg(feature = "loaders")]
pub fn builtin_level(config: &game_core::GameConfig) -> LoadResult<game_core::GameState> {
    LevelLoader::parse(BUILTIN_LEVEL)?.build(&builtin_catalog()?, config)
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_matches_the_defaults() {
        let config = ConfigLoader::parse(BUILTIN_CONFIG).unwrap();
        assert_eq!(config, game_core::GameConfig::default());
    }
}
