//! Map widget rendering the visible part of the grid.
//!
//! Levels can be larger than the terminal, so the map scrolls to keep the
//! focus (the target cursor, or else the player) on screen.

use game_core::{Position, RenderModel};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &RenderModel,
    cursor: Option<Position>,
    theme: &RatatuiTheme,
) {
    let block = Block::default().borders(Borders::ALL).title(" Map ");
    let inner = block.inner(area);

    let focus = cursor
        .or(model.player_position)
        .unwrap_or(Position::new(0, 0));
    let left = viewport_start(model.width, u32::from(inner.width), focus.x);
    let top = viewport_start(model.height, u32::from(inner.height), focus.y);

    let lines: Vec<Line> = model
        .rows()
        .skip(top as usize)
        .take(inner.height as usize)
        .enumerate()
        .map(|(row, tiles)| {
            let y = (top as usize + row) as i32;
            let spans: Vec<Span> = tiles
                .iter()
                .enumerate()
                .skip(left as usize)
                .take(inner.width as usize)
                .map(|(x, tile)| {
                    let (symbol, mut style) = theme.render_tile(tile);
                    if cursor == Some(Position::new(x as i32, y)) {
                        style = theme.cursor(style);
                    }
                    Span::styled(symbol.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// First map column (or row) to draw so that `focus` sits inside a window of
/// `view` cells, centered where the map allows.
pub fn viewport_start(map: u32, view: u32, focus: i32) -> u32 {
    if view == 0 || map <= view {
        return 0;
    }
    let focus = focus.clamp(0, map as i32 - 1) as u32;
    focus.saturating_sub(view / 2).min(map - view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_maps_never_scroll() {
        assert_eq!(viewport_start(10, 40, 9), 0);
    }

    #[test]
    fn large_maps_center_the_focus_and_stop_at_the_edges() {
        assert_eq!(viewport_start(100, 20, 50), 40);
        assert_eq!(viewport_start(100, 20, 3), 0);
        assert_eq!(viewport_start(100, 20, 99), 80);
    }
}
