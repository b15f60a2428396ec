//! Typestate game state machine for the live board.
//!
//! The game phase is encoded in a type parameter, so the turn controller
//! cannot place a mark on a finished game or read a winner off an
//! unfinished one. The phase-erased [`AnyGame`] wrapper exists for the UI
//! layer, which needs one storable, serializable value for any phase.

use super::action::{Move, PlaceError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::instrument;

/// Typestate marker: game is in progress.
#[derive(Debug, Clone, Copy)]
pub struct InProgress;

/// Typestate marker: game ended in a win.
#[derive(Debug, Clone, Copy)]
pub struct Won;

/// Typestate marker: game ended in a draw.
#[derive(Debug, Clone, Copy)]
pub struct Draw;

/// Game state with typestate phase encoding.
///
/// - `Game<InProgress>` - moves can be made
/// - `Game<Won>` - finished, has a `winner()`
/// - `Game<Draw>` - finished, no winner
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board,
    to_move: Player,
    winner: Option<Player>,
    history: Vec<Move>,
    _phase: PhantomData<S>,
}

/// Result of placing a mark - explicit state transition.
#[derive(Debug)]
pub enum GameTransition {
    /// Game continues with the other player to move.
    InProgress(Game<InProgress>),
    /// This move won the game.
    Won(Game<Won>),
    /// This move filled the board with no winner.
    Draw(Game<Draw>),
}

impl Game<InProgress> {
    /// Creates a new game with X (the human) to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: None,
            history: Vec::new(),
            _phase: PhantomData,
        }
    }

    /// Places the current player's mark, consuming the game and returning
    /// the next phase.
    ///
    /// The win check runs before the draw check, so a move that both wins
    /// and fills the board reports the win.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::SquareOccupied`] if the position is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(mut self, pos: Position) -> Result<GameTransition, PlaceError> {
        if !self.board.is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(Move::new(self.to_move, pos));

        match rules::status(&self.board) {
            GameStatus::Won(winner) => Ok(GameTransition::Won(Game {
                board: self.board,
                to_move: self.to_move,
                winner: Some(winner),
                history: self.history,
                _phase: PhantomData,
            })),
            GameStatus::Draw => Ok(GameTransition::Draw(Game {
                board: self.board,
                to_move: self.to_move,
                winner: None,
                history: self.history,
                _phase: PhantomData,
            })),
            GameStatus::InProgress => Ok(GameTransition::InProgress(Game {
                board: self.board,
                to_move: self.to_move.opponent(),
                winner: None,
                history: self.history,
                _phase: PhantomData,
            })),
        }
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

impl Default for Game<InProgress> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Game<Won> {
    /// Returns the winner of the game.
    pub fn winner(&self) -> Player {
        self.winner.expect("won game has a winner")
    }
}

/// Phase-erased, serializable wrapper for [`Game`] in any phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Player to move.
        to_move: Player,
        /// Moves made so far.
        history: Vec<Move>,
    },
    /// Game ended with a winner.
    Won {
        /// The board state.
        board: Board,
        /// The winner.
        winner: Player,
        /// Moves made.
        history: Vec<Move>,
    },
    /// Game ended in a draw.
    Draw {
        /// The board state.
        board: Board,
        /// Moves made.
        history: Vec<Move>,
    },
}

impl AnyGame {
    /// Creates a fresh game with X to move.
    pub fn new() -> Self {
        Game::new().into()
    }

    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Won { board, .. } => board,
            AnyGame::Draw { board, .. } => board,
        }
    }

    /// Returns the move history for any phase.
    pub fn history(&self) -> &[Move] {
        match self {
            AnyGame::InProgress { history, .. } => history,
            AnyGame::Won { history, .. } => history,
            AnyGame::Draw { history, .. } => history,
        }
    }

    /// Returns the player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !matches!(self, AnyGame::InProgress { .. })
    }

    /// Returns the game outcome.
    pub fn status(&self) -> GameStatus {
        match self {
            AnyGame::InProgress { .. } => GameStatus::InProgress,
            AnyGame::Won { winner, .. } => GameStatus::Won(*winner),
            AnyGame::Draw { .. } => GameStatus::Draw,
        }
    }

    /// Places the current player's mark, delegating to the typestate
    /// machine.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::GameOver`] if the game is finished, or
    /// [`PlaceError::SquareOccupied`] if the position is taken.
    pub fn place(self, pos: Position) -> Result<Self, PlaceError> {
        match self {
            AnyGame::InProgress {
                board,
                to_move,
                history,
            } => {
                let game = Game::<InProgress> {
                    board,
                    to_move,
                    winner: None,
                    history,
                    _phase: PhantomData,
                };
                Ok(match game.place(pos)? {
                    GameTransition::InProgress(g) => g.into(),
                    GameTransition::Won(g) => g.into(),
                    GameTransition::Draw(g) => g.into(),
                })
            }
            _ => Err(PlaceError::GameOver),
        }
    }
}

impl Default for AnyGame {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Game<InProgress>> for AnyGame {
    fn from(game: Game<InProgress>) -> Self {
        AnyGame::InProgress {
            to_move: game.to_move,
            board: game.board,
            history: game.history,
        }
    }
}

impl From<Game<Won>> for AnyGame {
    fn from(game: Game<Won>) -> Self {
        AnyGame::Won {
            winner: game.winner(),
            board: game.board,
            history: game.history,
        }
    }
}

impl From<Game<Draw>> for AnyGame {
    fn from(game: Game<Draw>) -> Self {
        AnyGame::Draw {
            board: game.board,
            history: game.history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(game: Game<InProgress>, pos: Position) -> Game<InProgress> {
        match game.place(pos).expect("legal move") {
            GameTransition::InProgress(g) => g,
            other => panic!("game ended early: {other:?}"),
        }
    }

    #[test]
    fn test_alternating_turns() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        let game = advance(game, Position::Center);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = advance(Game::new(), Position::Center);
        let result = game.place(Position::Center);
        assert_eq!(
            result.map(|_| ()),
            Err(PlaceError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_win_transition() {
        // X: 0, 1, 2 (top row) - O: 3, 4
        let game = advance(Game::new(), Position::TopLeft);
        let game = advance(game, Position::MiddleLeft);
        let game = advance(game, Position::TopCenter);
        let game = advance(game, Position::Center);
        match game.place(Position::TopRight).expect("legal move") {
            GameTransition::Won(game) => assert_eq!(game.winner(), Player::X),
            other => panic!("expected a win: {other:?}"),
        }
    }

    #[test]
    fn test_any_game_rejects_moves_after_end() {
        let mut game = AnyGame::new();
        // X: 0, 1, 2 wins; O: 3, 4.
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game = game.place(pos).expect("legal move");
        }
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(
            game.place(Position::BottomLeft).map(|_| ()),
            Err(PlaceError::GameOver)
        );
    }
}
