//! Header widget displaying turn information and game mode.

use game_core::{InteractionMode, RenderModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel with the turn counter and current mode.
pub fn render(frame: &mut Frame, area: Rect, model: &RenderModel, title: &str) {
    let text = vec![Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(model.turn.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(
            mode_text(model.mode),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} ")),
    );

    frame.render_widget(paragraph, area);
}

fn mode_text(mode: InteractionMode) -> String {
    match mode {
        InteractionMode::Immediate => String::new(),
        InteractionMode::Directional => " [DIRECTION]".to_string(),
        InteractionMode::Targeted => " [TARGET]".to_string(),
        InteractionMode::Menu(None) => " [INVENTORY]".to_string(),
        InteractionMode::Menu(Some(verb)) => {
            format!(" [INVENTORY: {}]", verb.to_string().to_uppercase())
        }
    }
}
