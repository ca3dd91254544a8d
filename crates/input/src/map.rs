//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions during normal play.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') => Some(GameAction::LockRow),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Map keyboard input to game actions while initials are being typed.
///
/// Letters feed the initials buffer, so gameplay keys (including 'r') are
/// plain characters here.
pub fn handle_text_entry_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Backspace => Some(GameAction::TextBackspace),
        KeyCode::Enter => Some(GameAction::TextConfirm),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(GameAction::TextChar(c)),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Honored from any phase, including mid-flash and mid-initials-entry.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_gameplay_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::LockRow)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_text_entry_keys() {
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::TextChar('a'))
        );
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Char('Z'))),
            Some(GameAction::TextChar('Z'))
        );
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Backspace)),
            Some(GameAction::TextBackspace)
        );
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::TextConfirm)
        );

        // Digits and punctuation never reach the initials buffer.
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Char('3'))),
            None
        );
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Char('!'))),
            None
        );
    }

    #[test]
    fn test_restart_key_is_a_letter_during_text_entry() {
        assert_eq!(
            handle_text_entry_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::TextChar('r'))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
