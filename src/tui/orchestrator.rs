//! Game orchestration between the human and the computer.

use super::players::Player;
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};
use unbeatable_tictactoe::{AnyGame, PlaceError, Player as Mark, Position};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move was applied; `game` is the resulting state.
    Moved {
        /// Who moved.
        mark: Mark,
        /// Where.
        position: Position,
        /// The game after the move.
        game: AnyGame,
    },
    /// The computer is thinking.
    Thinking,
    /// A human move was rejected (square taken).
    Rejected {
        /// The rejected position.
        position: Position,
    },
    /// The game ended.
    GameOver {
        /// The winner, or `None` for a draw.
        winner: Option<Mark>,
    },
}

/// Alternates turns between two players until the game ends.
pub struct Orchestrator {
    game: AnyGame,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator for a fresh game.
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: AnyGame::new(),
            human,
            computer,
            event_tx,
        }
    }

    /// Runs the game loop to completion.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game");

        loop {
            let Some(mark) = self.game.to_move() else {
                self.event_tx.send(GameEvent::GameOver {
                    winner: self.game.winner(),
                })?;
                info!(winner = ?self.game.winner(), "Game over");
                return Ok(());
            };

            let player = if mark == Mark::X {
                &mut self.human
            } else {
                &mut self.computer
            };
            if mark == Mark::O {
                self.event_tx.send(GameEvent::Thinking)?;
            }

            debug!(player = player.name(), %mark, "Waiting for move");
            let position = player.get_move(&self.game).await?;

            match self.game.clone().place(position) {
                Ok(next) => {
                    debug!(%mark, %position, "Move applied");
                    self.game = next;
                    self.event_tx.send(GameEvent::Moved {
                        mark,
                        position,
                        game: self.game.clone(),
                    })?;
                }
                Err(PlaceError::SquareOccupied(position)) => {
                    debug!(%position, "Square already taken");
                    self.event_tx.send(GameEvent::Rejected { position })?;
                }
                // Unreachable while to_move() returns Some, but harmless.
                Err(PlaceError::GameOver) => continue,
            }
        }
    }
}
