//! Inventory overlay listing the player's items with their selector keys.

use game_core::MenuView;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, menu: &MenuView, theme: &RatatuiTheme) {
    let mut lines = Vec::with_capacity(menu.entries.len() + 2);
    if menu.entries.is_empty() {
        lines.push(Line::from(Span::styled("You are not carrying anything.", theme.disabled())));
    }

    let mut category = None;
    for entry in &menu.entries {
        if category != Some(entry.category) {
            category = Some(entry.category);
            lines.push(Line::from(Span::styled(entry.category.to_string(), theme.title())));
        }
        let style = if entry.enabled {
            Style::default()
        } else {
            theme.disabled()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {}) ", entry.key), style),
            Span::styled(entry.name.clone(), style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title(menu))
        .title_bottom(" Esc to go back ");

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn title(menu: &MenuView) -> String {
    match menu.filter {
        Some(verb) => format!(" {} which item? ", capitalized(&verb.to_string())),
        None => " Inventory ".to_string(),
    }
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
