use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What the driver should do in response to an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Steer(Direction),
    /// Confirm the game-over dialog with "play again"
    Replay,
    /// Confirm the game-over dialog with "exit", or leave mid-game
    Exit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> InputCommand {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputCommand::Exit;
        }

        match key.code {
            KeyCode::Up => InputCommand::Steer(Direction::Up),
            KeyCode::Down => InputCommand::Steer(Direction::Down),
            KeyCode::Left => InputCommand::Steer(Direction::Left),
            KeyCode::Right => InputCommand::Steer(Direction::Right),

            KeyCode::Char('w') | KeyCode::Char('W') => InputCommand::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => InputCommand::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => InputCommand::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => InputCommand::Steer(Direction::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputCommand::Exit,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => InputCommand::Replay,

            _ => InputCommand::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
