//! Exhaustive minimax search for the computer player.

mod minimax;

pub use minimax::{COMPUTER, Score, ScoredMove, best_move, terminal_score};
