//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use unbeatable_tictactoe::{AnyGame, Position};

/// A source of moves for one side of the game.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next move for the given game.
    async fn get_move(&mut self, game: &AnyGame) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
