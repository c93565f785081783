//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::MoveDown)
        }

        // Flip
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Flip),

        // Pair count
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::MorePairs),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::FewerPairs),

        // Theme selector
        KeyCode::Tab | KeyCode::Char('t') => Some(GameAction::NextTheme),
        KeyCode::BackTab | KeyCode::Char('T') => Some(GameAction::PreviousTheme),

        // New deal
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Reshuffle),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Terminal position of a left-button press, if this event is one.
pub fn click_position(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::MoveUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::MoveUp)
        );
    }

    #[test]
    fn test_flip_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Flip)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Flip)
        );
    }

    #[test]
    fn test_pair_and_theme_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(GameAction::MorePairs)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            Some(GameAction::FewerPairs)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(GameAction::NextTheme)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('T'))),
            Some(GameAction::PreviousTheme)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(GameAction::Reshuffle)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_left_click_reports_position() {
        assert_eq!(
            click_position(mouse(MouseEventKind::Down(MouseButton::Left), 12, 7)),
            Some((12, 7))
        );
        assert_eq!(
            click_position(mouse(MouseEventKind::Down(MouseButton::Right), 12, 7)),
            None
        );
        assert_eq!(click_position(mouse(MouseEventKind::Moved, 1, 1)), None);
    }
}
