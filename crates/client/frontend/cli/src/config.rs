//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

use client_frontend_core::{FrontendConfig, config::parse};

/// CLI configuration.
///
/// Gathers where the game content comes from, where logs go, and the shared
/// frontend settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub content: ContentSource,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
    pub frontend: FrontendConfig,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CITADEL_DATA_DIR` - Content directory (default: built-in content)
    /// - `CITADEL_LEVEL` - Level name inside the content directory (default: `office`)
    /// - `CITADEL_CONFIG` - Path to a game configuration TOML file
    /// - `CITADEL_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `CITADEL_MESSAGE_CAPACITY`, `CITADEL_FRAME_MS` - see [`FrontendConfig::from_env`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            frontend: FrontendConfig::from_lookup(&lookup),
            ..Self::default()
        };

        config.content.data_dir = lookup("CITADEL_DATA_DIR").map(PathBuf::from);
        if let Some(level) = lookup("CITADEL_LEVEL").filter(|level| !level.trim().is_empty()) {
            config.content.level = level.trim().to_string();
        }
        config.content.config_path = lookup("CITADEL_CONFIG").map(PathBuf::from);
        config.log_dir = lookup("CITADEL_LOG_DIR").map(PathBuf::from);

        if let Some(height) = parse::<u16>(&lookup, "CITADEL_MESSAGE_LINES") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// Where the level and its settings are loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSource {
    pub data_dir: Option<PathBuf>,
    pub level: String,
    pub config_path: Option<PathBuf>,
}

impl ContentSource {
    pub const DEFAULT_LEVEL: &'static str = "office";
}

impl Default for ContentSource {
    fn default() -> Self {
        Self {
            data_dir: None,
            level: Self::DEFAULT_LEVEL.to_string(),
            config_path: None,
        }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}
