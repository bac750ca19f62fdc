//! Top-level client orchestrating the game session and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Session (Game state and the interaction state machine)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::path::Path;

use anyhow::{Context, Result};
use game_content::{ConfigLoader, ContentFactory};
use game_core::GameConfig;
use runtime::Session;

/// Top-level client container.
pub struct Client {
    session: Session,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Hands the session to the frontend and waits until the player quits.
    pub async fn run(self) -> Result<()> {
        let mut frontend = self.frontend;
        frontend.run(self.session).await
    }
}

/// Loads a session.
///
/// With a `data_dir`, `level` is read from `data_dir/levels/{level}.ron`
/// along with the directory's items and configuration. Without one the
/// built-in office level is used. `config_path` overrides the game
/// configuration in both cases.
pub fn load_session(
    data_dir: Option<&Path>,
    level: &str,
    config_path: Option<&Path>,
) -> Result<Session> {
    let override_config = config_path
        .map(|path| {
            ConfigLoader::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        })
        .transpose()?;

    let builder = match data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            let config = match override_config {
                Some(config) => config,
                None => factory.load_config()?,
            };
            let catalog = factory.load_items()?;
            let state = factory
                .load_level(level)
                .with_context(|| format!("Failed to load level '{level}'"))?
                .build(&catalog, &config)?;
            tracing::info!(data_dir = %dir.display(), level, "content loaded");
            Session::builder().config(config).initial_state(state)
        }
        None => {
            let config = override_config.unwrap_or_else(GameConfig::default);
            tracing::info!("using built-in content");
            Session::builder().config(config).builtin_level()?
        }
    };

    Ok(builder.build()?)
}
