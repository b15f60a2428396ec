//! Computer player backed by the minimax engine.

use super::Player;
use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;
use unbeatable_tictactoe::{AnyGame, COMPUTER, Position, best_move};

/// Computer player that plays optimally after a short "thinking" pause.
///
/// The pause is presentation, not computation: the search itself is
/// effectively instant on a 3x3 board.
pub struct ComputerPlayer {
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player with the given thinking delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position> {
        sleep(self.delay).await;

        let mut board = game.board().clone();
        let choice = best_move(&mut board, COMPUTER);
        debug!(position = %choice.position(), score = choice.score(), "Computer chose move");

        Ok(choice.position())
    }

    fn name(&self) -> &str {
        "Computer"
    }
}
