//! Keyboard input handlers.

use anyhow::Result;
use crossterm::event::KeyEvent;
use game_core::{GameError, InputEvent};
use runtime::StepOutcome;

use super::super::EventLoop;
use crate::input::KeyAction;

impl EventLoop {
    /// Handles one key press. Returns `true` when the session has ended.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> Result<bool> {
        match self.input.handle_key(key, self.session.mode()) {
            KeyAction::Submit(input) => self.submit(input),
            KeyAction::MoveCursor(direction) => {
                if let Some(cursor) = self.app_state.cursor.as_mut() {
                    cursor.step(direction);
                }
                Ok(false)
            }
            KeyAction::SubmitCursor => match self.app_state.cursor_position() {
                Some(position) => self.submit(InputEvent::Target(position)),
                None => Ok(false),
            },
            KeyAction::None => Ok(false),
        }
    }

    fn submit(&mut self, input: InputEvent) -> Result<bool> {
        match self.session.submit(input) {
            Ok(StepOutcome::Exit) => return Ok(true),
            Ok(StepOutcome::Continue { .. }) => {}
            Err(error) => {
                tracing::error!(
                    code = error.error_code(),
                    severity = ?error.severity(),
                    %error,
                    ?input,
                    "input failed"
                );
                self.messages.push_error(error.to_string());
            }
        }

        self.messages.sync(self.session.narration());
        self.follow_mode();
        Ok(false)
    }

    /// Shows or hides the target cursor to match the session's mode.
    fn follow_mode(&mut self) {
        let grid = &self.session.state().grid;
        let player = self
            .session
            .state()
            .player()
            .and_then(|player| player.position());
        self.app_state
            .follow_mode(self.session.mode(), player, grid.width(), grid.height());
    }
}
