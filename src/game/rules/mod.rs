//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the turn controller share one
//! source of truth for terminal conditions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_winner};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Computes the outcome of a board.
///
/// A win is checked before a draw, so a full board that contains a
/// winning line reports the win.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_status_in_progress() {
        let board = Board::new();
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_with_win_reports_win() {
        // X X X / O O X / O X O - full, but X owns the top row.
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (i, player) in marks.into_iter().enumerate() {
            board.set(Position::from_index(i).unwrap(), Square::Occupied(player));
        }
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Player::X));
    }
}
