//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a logical key.
///
/// Release events map to nothing; presses and auto-repeats both count.
pub fn map_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Key::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Key::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Key::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Key::SoftDrop)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Key::Rotate)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), Some(Key::MoveLeft));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Right)), Some(Key::MoveRight));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Down)), Some(Key::SoftDrop));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('H'))), Some(Key::MoveLeft));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('d'))), Some(Key::MoveRight));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('J'))), Some(Key::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Some(Key::Rotate));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('k'))), Some(Key::Rotate));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('W'))), Some(Key::Rotate));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('Q'))), Some(Key::Quit));
    }

    #[test]
    fn test_unmapped_and_release() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key_event(release), None);

        let repeat = KeyEvent { kind: KeyEventKind::Repeat, ..release };
        assert_eq!(map_key_event(repeat), Some(Key::MoveLeft));
    }
}
