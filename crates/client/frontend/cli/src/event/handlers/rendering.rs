//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let model = self.session.render_model()?;

        let ctx = ui::RenderContext {
            model: &model,
            messages: &self.messages,
            app_state: &self.app_state,
            message_panel_height: self.ui.message_panel_height,
            title: &self.title,
        };

        ui::render(terminal, &ctx)
    }
}
