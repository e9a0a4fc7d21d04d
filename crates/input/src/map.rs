//! Key mapping from terminal events to board commands.
//!
//! The classic layout: Left/Right shift, Down turns clockwise, Up turns
//! counter-clockwise, Space hard-drops and `d` soft-drops, with vi-style
//! aliases next to it.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::MoveRight),

        // Rotation
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Command::RotateClockwise),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Command::RotateCounterClockwise),

        // Drops
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDrop)
        }

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(Command::Start),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Option<Command> {
        command_for_key(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(press(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(press(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(press(KeyCode::Char('H')), Some(Command::MoveLeft));
        assert_eq!(press(KeyCode::Char('l')), Some(Command::MoveRight));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(press(KeyCode::Down), Some(Command::RotateClockwise));
        assert_eq!(press(KeyCode::Up), Some(Command::RotateCounterClockwise));
        assert_eq!(press(KeyCode::Char('z')), Some(Command::RotateCounterClockwise));
        assert_eq!(press(KeyCode::Char('X')), Some(Command::RotateClockwise));
    }

    #[test]
    fn test_drop_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(Command::HardDrop));
        assert_eq!(press(KeyCode::Char('d')), Some(Command::SoftDrop));
        assert_eq!(press(KeyCode::Char('D')), Some(Command::SoftDrop));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(press(KeyCode::Char('p')), Some(Command::TogglePause));
        assert_eq!(press(KeyCode::Enter), Some(Command::Start));
        assert_eq!(press(KeyCode::Char('?')), None);
    }

    #[test]
    fn test_control_chords_are_not_commands() {
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
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
}
