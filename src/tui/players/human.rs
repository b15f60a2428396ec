//! Human player fed by the keyboard loop.

use super::Player;
use anyhow::Result;
use tokio::sync::mpsc;
use unbeatable_tictactoe::{AnyGame, Position};

/// Human player receiving positions selected in the UI.
pub struct HumanPlayer {
    input_rx: mpsc::UnboundedReceiver<Position>,
}

impl HumanPlayer {
    /// Creates a new human player reading from the given channel.
    pub fn new(input_rx: mpsc::UnboundedReceiver<Position>) -> Self {
        Self { input_rx }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &AnyGame) -> Result<Position> {
        // Drop selections queued while it wasn't our turn.
        while self.input_rx.try_recv().is_ok() {}

        self.input_rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("input channel closed"))
    }

    fn name(&self) -> &str {
        "You"
    }
}
