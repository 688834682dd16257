//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to a game command.
///
/// Once the game is over only restart and exit-to-menu are reachable; Space
/// doubles as restart there instead of hard drop.
pub fn map_key(key: KeyEvent, game_over: bool) -> Option<GameCommand> {
    if game_over {
        return match key.code {
            KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(GameCommand::Restart)
            }
            KeyCode::Esc => Some(GameCommand::ExitToMenu),
            _ => None,
        };
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameCommand::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameCommand::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameCommand::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameCommand::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameCommand::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Restart),
        KeyCode::Esc => Some(GameCommand::ExitToMenu),

        _ => None,
    }
}

/// Presses and auto-repeats count; releases (on terminals that report them) do not.
pub fn is_press(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
