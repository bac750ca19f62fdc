//! Footer widget with key hints for the current mode.

use game_core::InteractionMode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect, mode: InteractionMode) {
    let hint = Paragraph::new(hint(mode)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}

fn hint(mode: InteractionMode) -> &'static str {
    match mode {
        InteractionMode::Immediate => {
            "arrows/hjkl/keypad move  ^O open  ^C close  ^L lock  ^U unlock  g get  . wait  x examine  i/u/d/t/c/e/w inventory  Esc quit"
        }
        InteractionMode::Directional => "direction to act in  Esc cancel",
        InteractionMode::Targeted => "move cursor  Enter select  Esc cancel",
        InteractionMode::Menu(None) => "letter describe  u/d/t/c/e/w filter  Esc close",
        InteractionMode::Menu(Some(_)) => "letter select  Esc all items",
    }
}
