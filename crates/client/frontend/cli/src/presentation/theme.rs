//! Colors and styles for the terminal UI.

use client_frontend_core::MessageLevel;
use game_core::{Glyph, RenderTile, Rgb, TileStatus};
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules for the render model.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn color(&self, rgb: Rgb) -> Color {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Symbol and style for one map cell. Remembered tiles are drawn dim
    /// and without their background.
    pub fn render_tile(&self, tile: &RenderTile) -> (char, Style) {
        let Glyph { symbol, color } = tile.top();
        let style = match tile.status {
            TileStatus::Visible => Style::default()
                .fg(self.color(color))
                .bg(self.color(tile.bg)),
            TileStatus::Remembered => Style::default()
                .fg(self.color(color))
                .add_modifier(Modifier::DIM),
            TileStatus::Unknown => Style::default(),
        };
        (symbol, style)
    }

    pub fn cursor(&self, base: Style) -> Style {
        base.bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
