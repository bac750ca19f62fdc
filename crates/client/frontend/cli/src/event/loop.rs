//! Event loop driving the session from keyboard input.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use runtime::Session;
use tokio::time::{self, Duration};

use crate::{config::UiConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::MessageLog;

/// Owns the session for the lifetime of the terminal UI.
pub struct EventLoop {
    pub(crate) session: Session,
    pub(crate) messages: MessageLog,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    pub(crate) frame_interval: Duration,
    pub(crate) ui: UiConfig,
    pub(crate) title: String,
}

impl EventLoop {
    pub fn new(
        session: Session,
        messages: MessageLog,
        frame_interval: Duration,
        ui: UiConfig,
    ) -> Self {
        let title = session
            .state()
            .player()
            .map(|player| player.name.clone())
            .unwrap_or_else(|| "Citadel".to_string());
        Self {
            session,
            messages,
            input: InputHandler::new(),
            app_state: AppState::new(),
            frame_interval,
            ui,
            title,
        }
    }

    /// Runs until the player exits. Returns the message log so the caller
    /// can report the last lines after the terminal is restored.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<MessageLog> {
        self.messages.sync(self.session.narration());
        self.render(terminal)?;

        loop {
            time::sleep(self.frame_interval).await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok(self.messages)
    }

    /// Drains pending terminal events. Returns `true` once the player exits.
    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key_press(key)? {
                        return Ok(true);
                    }
                    self.render(terminal)?;
                }
                Event::Resize(_, _) => self.render(terminal)?,
                _ => {}
            }
        }
        Ok(false)
    }
}
