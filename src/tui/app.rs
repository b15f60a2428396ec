//! Application state and event handling.

use super::input;
use super::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use tracing::debug;
use unbeatable_tictactoe::{AnyGame, Player as Mark, Position};

/// Main application state: the UI's view of the game plus the cursor.
pub struct App {
    game: AnyGame,
    cursor: Position,
    status: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: AnyGame::new(),
            cursor: Position::Center,
            status: "Your turn! You are X.".to_string(),
        }
    }

    /// The current game state.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// The highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Applies an event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Moved { mark, game, .. } => {
                self.game = game;
                if !self.game.is_over() {
                    self.status = match mark {
                        Mark::X => "Computer's turn...".to_string(),
                        Mark::O => "Your turn!".to_string(),
                    };
                }
            }
            GameEvent::Thinking => {
                self.status = "Computer is thinking...".to_string();
            }
            GameEvent::Rejected { position } => {
                self.status = format!("{} is already taken.", position.label());
            }
            GameEvent::GameOver { winner } => {
                self.status = match winner {
                    Some(Mark::X) => "You win! Press 'r' to restart or 'q' to quit.",
                    Some(Mark::O) => "Computer wins! Press 'r' to restart or 'q' to quit.",
                    None => "It's a draw! Press 'r' to restart or 'q' to quit.",
                }
                .to_string();
            }
        }
    }

    /// Resets the UI for a new game.
    pub fn restart(&mut self) {
        self.game = AnyGame::new();
        self.cursor = Position::Center;
        self.status = "Your turn! You are X.".to_string();
    }
}
