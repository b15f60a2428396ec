//! Minimax search over the 3x3 board.
//!
//! The search is exhaustive: it recurses over every legal continuation
//! down to a terminal board. At this board size no pruning or caching is
//! needed. Scoring is fixed to the roles of the two players: the computer
//! (O) maximizes toward `+10`, the human (X) minimizes toward `-10`, and a
//! draw scores `0`.
//!
//! The search mutates the caller's board in place while exploring - place
//! a mark, recurse, restore the square - and guarantees the board is
//! bit-identical to its pre-call state when it returns.

use crate::game::rules;
use crate::game::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Game-theoretic score of a board, relative to the computer.
pub type Score = i32;

/// The mark the engine plays; scoring maximizes toward this player.
pub const COMPUTER: Player = Player::O;

const COMPUTER_WIN: Score = 10;
const HUMAN_WIN: Score = -10;
const DRAW: Score = 0;

/// A candidate move paired with the score it achieves under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    position: Position,
    score: Score,
}

impl ScoredMove {
    /// The position to play.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The score this move achieves if both sides play optimally.
    pub fn score(&self) -> Score {
        self.score
    }
}

/// Scores a terminal board, or returns `None` if the game is ongoing.
///
/// Checked in priority order: computer win, human win, full board. The
/// first two are mutually exclusive under legal alternating play; the
/// ordering makes a full board that contains a winning line score as the
/// win, not the draw.
pub fn terminal_score(board: &Board) -> Option<Score> {
    if rules::has_winner(board, COMPUTER) {
        Some(COMPUTER_WIN)
    } else if rules::has_winner(board, COMPUTER.opponent()) {
        Some(HUMAN_WIN)
    } else if rules::is_full(board) {
        Some(DRAW)
    } else {
        None
    }
}

/// Computes the optimal move for `to_move` on the given board.
///
/// The board is explored by scoped mutation and is restored to its exact
/// pre-call state before returning; calling twice in a row yields the
/// same result.
///
/// Ties break toward the lowest-indexed square: candidates are enumerated
/// in ascending index order and a strict comparison keeps the first-seen
/// best, so the result is deterministic.
///
/// # Panics
///
/// Panics if the board is already terminal. The turn controller must
/// check for a win or a full board before asking for a move.
#[instrument(skip(board), fields(to_move = %to_move))]
pub fn best_move(board: &mut Board, to_move: Player) -> ScoredMove {
    assert!(
        terminal_score(board).is_none(),
        "best_move called on a terminal board"
    );
    search(board, to_move)
}

/// Recursive minimax step. Requires a non-terminal board.
fn search(board: &mut Board, to_move: Player) -> ScoredMove {
    let mut best: Option<ScoredMove> = None;

    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }

        board.set(position, Square::Occupied(to_move));
        let score = match terminal_score(board) {
            Some(score) => score,
            None => search(board, to_move.opponent()).score,
        };
        board.set(position, Square::Empty);

        let better = match best {
            None => true,
            Some(b) if to_move == COMPUTER => score > b.score,
            Some(b) => score < b.score,
        };
        if better {
            best = Some(ScoredMove { position, score });
        }
    }

    best.expect("non-terminal board has an empty square")
}
