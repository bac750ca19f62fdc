//! Glue code tying the session and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use runtime::Session;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal::{self, TerminalGuard};
use client_frontend_core::{Frontend, MessageLog};

const WELCOME: &str = "Welcome to the citadel. Press Esc to leave.";

/// Terminal frontend built on ratatui and crossterm.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, session: Session) -> Result<()> {
        let mut messages = MessageLog::new(self.config.frontend.messages.capacity);
        messages.push_text(WELCOME);

        let event_loop = EventLoop::new(
            session,
            messages,
            self.config.frontend.frame.interval,
            self.config.ui.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;
        tracing::info!("terminal ui started");

        let messages = event_loop.run(&mut terminal).await?;
        tracing::info!(messages = messages.len(), "terminal ui stopped");
        Ok(())
    }
}
