//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events. The same key means different things
//! depending on what the game is waiting for, so every lookup takes the
//! current [`InteractionMode`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::{CardinalDirection, InputEvent, InteractionMode, MenuVerb};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed the input to the session.
    Submit(InputEvent),
    /// Move the target cursor without telling the game.
    MoveCursor(CardinalDirection),
    /// Submit the tile under the target cursor.
    SubmitCursor,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: InteractionMode) -> KeyAction {
        match mode {
            InteractionMode::Immediate => self.immediate(key),
            InteractionMode::Directional => match key.code {
                KeyCode::Esc => KeyAction::Submit(InputEvent::Cancel),
                _ => direction(key)
                    .map(|direction| KeyAction::Submit(InputEvent::Move(direction)))
                    .unwrap_or(KeyAction::None),
            },
            InteractionMode::Targeted => match key.code {
                KeyCode::Esc => KeyAction::Submit(InputEvent::Cancel),
                KeyCode::Enter => KeyAction::SubmitCursor,
                _ => direction(key)
                    .map(KeyAction::MoveCursor)
                    .unwrap_or(KeyAction::None),
            },
            InteractionMode::Menu(filter) => self.menu(key, filter),
        }
    }

    fn immediate(&self, key: KeyEvent) -> KeyAction {
        if key.code == KeyCode::Esc {
            return KeyAction::Submit(InputEvent::Exit);
        }
        if let Some(direction) = direction(key) {
            return KeyAction::Submit(InputEvent::Move(direction));
        }

        let KeyCode::Char(ch) = key.code else {
            return KeyAction::None;
        };
        let input = if key.modifiers.contains(KeyModifiers::CONTROL) {
            match ch.to_ascii_lowercase() {
                'o' => InputEvent::Open,
                'c' => InputEvent::Close,
                'l' => InputEvent::Lock,
                'u' => InputEvent::Unlock,
                _ => return KeyAction::None,
            }
        } else {
            match ch {
                'g' => InputEvent::Get,
                '.' | '5' => InputEvent::Wait,
                'x' => InputEvent::Examine,
                'i' => InputEvent::ShowInventory(None),
                _ => match filter_for(ch) {
                    Some(verb) => InputEvent::ShowInventory(Some(verb)),
                    None => return KeyAction::None,
                },
            }
        };
        KeyAction::Submit(input)
    }

    fn menu(&self, key: KeyEvent, filter: Option<MenuVerb>) -> KeyAction {
        match (key.code, filter) {
            (KeyCode::Esc, Some(_)) => KeyAction::Submit(InputEvent::ShowInventory(None)),
            (KeyCode::Esc, None) => KeyAction::Submit(InputEvent::HideInventory),
            (KeyCode::Char(ch), None) => match filter_for(ch) {
                Some(verb) => KeyAction::Submit(InputEvent::ShowInventory(Some(verb))),
                None => KeyAction::Submit(InputEvent::InventorySelect(ch)),
            },
            (KeyCode::Char(ch), Some(_)) => KeyAction::Submit(InputEvent::InventorySelect(ch)),
            _ => KeyAction::None,
        }
    }
}

/// Arrow keys, vi keys and keypad digits.
fn direction(key: KeyEvent) -> Option<CardinalDirection> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('k' | '8') => CardinalDirection::North,
        KeyCode::Down | KeyCode::Char('j' | '2') => CardinalDirection::South,
        KeyCode::Left | KeyCode::Char('h' | '4') => CardinalDirection::West,
        KeyCode::Right | KeyCode::Char('l' | '6') => CardinalDirection::East,
        KeyCode::Home | KeyCode::Char('7') => CardinalDirection::NorthWest,
        KeyCode::PageUp | KeyCode::Char('9') => CardinalDirection::NorthEast,
        KeyCode::End | KeyCode::Char('1') => CardinalDirection::SouthWest,
        KeyCode::PageDown | KeyCode::Char('3') => CardinalDirection::SouthEast,
        _ => return None,
    };
    Some(direction)
}

fn filter_for(ch: char) -> Option<MenuVerb> {
    match ch {
        'u' => Some(MenuVerb::Use),
        'd' => Some(MenuVerb::Drop),
        't' => Some(MenuVerb::Throw),
        'c' => Some(MenuVerb::Consume),
        'e' => Some(MenuVerb::Equip),
        'w' => Some(MenuVerb::Wear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    fn immediate(event: KeyEvent) -> KeyAction {
        InputHandler::new().handle_key(event, InteractionMode::Immediate)
    }

    #[test]
    fn maps_movement_keys() {
        let north = KeyAction::Submit(InputEvent::Move(CardinalDirection::North));
        assert_eq!(immediate(key(KeyCode::Up)), north);
        assert_eq!(immediate(key(KeyCode::Char('k'))), north);
        assert_eq!(immediate(key(KeyCode::Char('8'))), north);
        assert_eq!(
            immediate(key(KeyCode::Char('3'))),
            KeyAction::Submit(InputEvent::Move(CardinalDirection::SouthEast))
        );
    }

    #[test]
    fn control_keys_work_fixtures() {
        assert_eq!(immediate(ctrl('o')), KeyAction::Submit(InputEvent::Open));
        assert_eq!(immediate(ctrl('c')), KeyAction::Submit(InputEvent::Close));
        assert_eq!(immediate(ctrl('l')), KeyAction::Submit(InputEvent::Lock));
        assert_eq!(immediate(ctrl('u')), KeyAction::Submit(InputEvent::Unlock));
        assert_eq!(immediate(ctrl('z')), KeyAction::None);
    }

    #[test]
    fn plain_letters_open_filtered_inventories() {
        assert_eq!(
            immediate(key(KeyCode::Char('c'))),
            KeyAction::Submit(InputEvent::ShowInventory(Some(MenuVerb::Consume)))
        );
        assert_eq!(
            immediate(key(KeyCode::Char('i'))),
            KeyAction::Submit(InputEvent::ShowInventory(None))
        );
        assert_eq!(immediate(key(KeyCode::Char('g'))), KeyAction::Submit(InputEvent::Get));
        assert_eq!(immediate(key(KeyCode::Char('.'))), KeyAction::Submit(InputEvent::Wait));
        assert_eq!(immediate(key(KeyCode::Esc)), KeyAction::Submit(InputEvent::Exit));
    }

    #[test]
    fn escape_backs_out_one_level() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), InteractionMode::Directional),
            KeyAction::Submit(InputEvent::Cancel)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), InteractionMode::Menu(Some(MenuVerb::Drop))),
            KeyAction::Submit(InputEvent::ShowInventory(None))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Esc), InteractionMode::Menu(None)),
            KeyAction::Submit(InputEvent::HideInventory)
        );
    }

    #[test]
    fn menu_letters_filter_or_select() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('d')), InteractionMode::Menu(None)),
            KeyAction::Submit(InputEvent::ShowInventory(Some(MenuVerb::Drop)))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('a')), InteractionMode::Menu(None)),
            KeyAction::Submit(InputEvent::InventorySelect('a'))
        );
        assert_eq!(
            handler.handle_key(
                key(KeyCode::Char('d')),
                InteractionMode::Menu(Some(MenuVerb::Drop))
            ),
            KeyAction::Submit(InputEvent::InventorySelect('d'))
        );
    }

    #[test]
    fn targeted_mode_drives_the_cursor() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), InteractionMode::Targeted),
            KeyAction::MoveCursor(CardinalDirection::West)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), InteractionMode::Targeted),
            KeyAction::SubmitCursor
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), InteractionMode::Targeted),
            KeyAction::None
        );
    }

    #[test]
    fn directional_mode_answers_with_moves() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('9')), InteractionMode::Directional),
            KeyAction::Submit(InputEvent::Move(CardinalDirection::NorthEast))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('g')), InteractionMode::Directional),
            KeyAction::None
        );
    }
}
