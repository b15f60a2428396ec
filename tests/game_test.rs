//! Tests for the typestate game state machine.

use unbeatable_tictactoe::{
    AnyGame, Game, GameStatus, GameTransition, Move, PlaceError, Player, Position,
};

fn advance(game: Game<unbeatable_tictactoe::InProgress>, pos: Position) -> Game<unbeatable_tictactoe::InProgress> {
    match game.place(pos).expect("legal move") {
        GameTransition::InProgress(g) => g,
        other => panic!("game ended early: {other:?}"),
    }
}

#[test]
fn test_lifecycle_to_win() {
    let game = Game::new();
    assert_eq!(game.to_move(), Player::X);

    // X: 0, 1, 2 (top row) - O: 3, 4.
    let game = advance(game, Position::TopLeft);
    let game = advance(game, Position::MiddleLeft);
    let game = advance(game, Position::TopCenter);
    let game = advance(game, Position::Center);

    match game.place(Position::TopRight).expect("legal move") {
        GameTransition::Won(game) => {
            assert_eq!(game.winner(), Player::X);
            assert_eq!(game.history().len(), 5);
        }
        other => panic!("expected a win: {other:?}"),
    }
}

#[test]
fn test_lifecycle_to_draw() {
    // Ends as X O X / O X X / O X O with no line.
    let moves = [
        Position::TopLeft,      // X
        Position::TopCenter,    // O
        Position::TopRight,     // X
        Position::MiddleLeft,   // O
        Position::Center,       // X
        Position::BottomLeft,   // O
        Position::MiddleRight,  // X
        Position::BottomRight,  // O
        Position::BottomCenter, // X
    ];

    let mut game = Game::new();
    for pos in &moves[..8] {
        game = advance(game, *pos);
    }

    match game.place(moves[8]).expect("legal move") {
        GameTransition::Draw(game) => assert_eq!(game.history().len(), 9),
        other => panic!("expected a draw: {other:?}"),
    }
}

#[test]
fn test_occupied_square_rejected() {
    let game = advance(Game::new(), Position::Center);
    assert_eq!(
        game.place(Position::Center).map(|_| ()),
        Err(PlaceError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_any_game_tracks_status() {
    let mut game = AnyGame::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Some(Player::X));

    // X: 0, 4, 8 (diagonal) - O: 1, 2.
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ] {
        game = game.place(pos).expect("legal move");
    }

    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(
        game.place(Position::BottomLeft).map(|_| ()),
        Err(PlaceError::GameOver)
    );
}

#[test]
fn test_move_wire_shape() {
    let mov = Move::new(Player::X, Position::Center);
    let value = serde_json::to_value(mov).expect("serializes");
    assert_eq!(
        value,
        serde_json::json!({ "player": "X", "position": "Center" })
    );
}
