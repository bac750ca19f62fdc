//! Citadel game client binary.
//!
//! Composition root: loads configuration from the environment, sets up
//! logging, builds the session and hands it to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client::{Client, load_session};
    use client_frontend_cli::{CliConfig, CliFrontend, logging};

    // 1. Load configuration from environment
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on exit
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting citadel client");
    tracing::info!(level = %cli_config.content.level, "content source");

    // 3. Build the session
    let content = &cli_config.content;
    let session = load_session(
        content.data_dir.as_deref(),
        &content.level,
        content.config_path.as_deref(),
    )?;

    // 4. Build and run
    let frontend = CliFrontend::new(cli_config);
    let client = Client::builder().session(session).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
