//! Board model, rules, and the typestate game state machine.

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, PlaceError};
pub use game::{AnyGame, Draw, Game, GameTransition, InProgress, Won};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
