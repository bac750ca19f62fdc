//! UI rendering.
//!
//! Composes the widgets into the game screen: header, map, messages and a
//! key-hint footer, with the inventory drawn as an overlay while a menu is
//! open.
use anyhow::Result;
use game_core::RenderModel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::MessageLog;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub model: &'a RenderModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
    pub title: &'a str,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        render_game_ui(frame, ctx, &theme);

        if let Some(menu) = &ctx.model.menu {
            let area = centered_rect(60, 70, frame.area());
            widgets::inventory::render(frame, area, menu, &theme);
        }
    })?;

    Ok(())
}

fn render_game_ui(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Map
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(1),                        // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.model, ctx.title);

    widgets::map::render(
        frame,
        chunks[1],
        ctx.model,
        ctx.app_state.cursor_position(),
        theme,
    );

    // Borders take two of the panel's lines.
    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent: Vec<_> = ctx.messages.recent(visible).collect();
    widgets::messages::render(frame, chunks[2], &recent, theme);

    widgets::footer::render(frame, chunks[3], ctx.model.mode);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_sit_in_the_middle() {
        let area = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(25, 10, 50, 20));
    }
}
