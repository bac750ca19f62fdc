//! File logging for the terminal client.
//!
//! Stdout belongs to the TUI, so every session writes its own log file under
//! the platform cache directory instead.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Platform log directory, e.g. `~/.cache/citadel/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "citadel")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("citadel"))
        .join("logs")
}

/// Directory for one session's logs, named after the start time.
pub fn session_log_dir(root: &Path) -> PathBuf {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    root.join(format!("session_{started}"))
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let root = log_dir.map_or_else(default_log_dir, Path::to_path_buf);
    let session_dir = session_log_dir(&root);
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("Failed to create log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::info!(path = %session_dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_directories_live_under_the_root() {
        let root = Path::new("/tmp/citadel-logs");
        let dir = session_log_dir(root);
        assert_eq!(dir.parent(), Some(root));
        assert!(
            dir.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("session_"))
        );
    }

    #[test]
    fn default_directory_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }
}
