//! Unbeatable tic-tac-toe - pure game logic and an optimal minimax opponent.
//!
//! The library is the decision core of a single-player tic-tac-toe game:
//! the human plays X, the computer plays O and never loses. It performs no
//! I/O; the terminal UI in the companion binary owns all mutable state and
//! timing and calls in through [`best_move`] and the rules functions.
//!
//! # Architecture
//!
//! - **Board model** ([`Board`], [`rules`]): the 3x3 grid, the eight
//!   winning lines, win and draw detection.
//! - **Search engine** ([`best_move`]): exhaustive minimax over all legal
//!   continuations, deterministic tie-break.
//! - **Game state machine** ([`Game`], [`AnyGame`]): typestate phases for
//!   the live game the controller drives.
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{best_move, Board, Player, Position};
//!
//! let mut board = Board::new();
//! let choice = best_move(&mut board, Player::O);
//!
//! // Optimal play from both sides draws; ties break toward the
//! // lowest-indexed square.
//! assert_eq!(choice.score(), 0);
//! assert_eq!(choice.position(), Position::TopLeft);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod game;

// Crate-level exports - search engine
pub use engine::{COMPUTER, ScoredMove, Score, best_move, terminal_score};

// Crate-level exports - board model and rules
pub use game::rules::{check_winner, has_winner, is_draw, is_full, status};
pub use game::{Board, GameStatus, Move, PlaceError, Player, Position, Square};

// Crate-level exports - typestate game
pub use game::{AnyGame, Draw, Game, GameTransition, InProgress, Won};
