//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;
use std::time::Duration;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub frame: FrameConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, frame: FrameConfig) -> Self {
        Self { messages, frame }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CITADEL_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `CITADEL_FRAME_MS` - Input poll and redraw interval in milliseconds (default: 16)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`FrontendConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = parse::<usize>(&lookup, "CITADEL_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(millis) = parse::<u64>(&lookup, "CITADEL_FRAME_MS") {
            config.frame.interval = Duration::from_millis(millis.max(1));
        }

        config
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameConfig {
    /// How often the UI polls for input and redraws.
    pub interval: Duration,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(16),
        }
    }
}

/// Reads and parses one variable; unparsable values count as unset.
pub fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
