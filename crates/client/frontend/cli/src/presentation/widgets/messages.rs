//! Messages widget displaying recent narration.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` is newest first and is drawn bottom to top.
pub fn render(frame: &mut Frame, area: Rect, messages: &[&MessageEntry], theme: &RatatuiTheme) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Messages "))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

/// Format a message entry with its turn, when it has one.
fn format_message(entry: &MessageEntry) -> String {
    match entry.turn {
        Some(turn) => format!("[{}] {}", turn, entry.text),
        None => entry.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::MessageLevel;
    use game_core::Turn;

    #[test]
    fn narration_carries_its_turn() {
        let entry = MessageEntry::new("You open the door.", Some(Turn(7)), MessageLevel::Info);
        assert_eq!(format_message(&entry), "[7] You open the door.");

        let entry = MessageEntry::new("Welcome.", None, MessageLevel::Info);
        assert_eq!(format_message(&entry), "Welcome.");
    }
}
