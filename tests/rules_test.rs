//! Tests for win, draw, and outcome detection.

use unbeatable_tictactoe::{
    Board, GameStatus, Player, Position, Square, check_winner, has_winner, is_draw, is_full,
    status,
};

/// The 8 winning index triples: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

fn board_from(cells: [char; 9]) -> Board {
    let mut board = Board::new();
    for (i, c) in cells.into_iter().enumerate() {
        let square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
        board.set(pos(i), square);
    }
    board
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for index in line {
                board.set(pos(index), Square::Occupied(player));
            }
            assert!(
                has_winner(&board, player),
                "line {line:?} should win for {player}"
            );
            assert_eq!(check_winner(&board), Some(player));
            assert!(!has_winner(&board, player.opponent()));

            // Corrupting any one square of the line clears the win.
            for index in line {
                let mut spoiled = board.clone();
                spoiled.set(pos(index), Square::Occupied(player.opponent()));
                assert!(
                    !has_winner(&spoiled, player),
                    "line {line:?} broken at {index} should not win"
                );
            }
        }
    }
}

#[test]
fn test_is_full_iff_no_empty_square() {
    assert!(!is_full(&Board::new()));

    let mut board = Board::new();
    for index in 0..8 {
        board.set(pos(index), Square::Occupied(Player::X));
    }
    assert!(!is_full(&board));

    board.set(pos(8), Square::Occupied(Player::O));
    assert!(is_full(&board));
}

#[test]
fn test_completed_diagonal_is_terminal() {
    // O X O / X O X / . . X - O already owns the 0-4-8 diagonal.
    let board = board_from(['O', 'X', 'O', 'X', 'O', 'X', '.', '.', 'X']);
    assert!(has_winner(&board, Player::O));
    assert!(!has_winner(&board, Player::X));
    assert_eq!(status(&board), GameStatus::Won(Player::O));
}

#[test]
fn test_full_board_with_win_is_not_a_draw() {
    // X X X / O O X / O X O - full, but X owns the top row.
    let board = board_from(['X', 'X', 'X', 'O', 'O', 'X', 'O', 'X', 'O']);
    assert!(is_full(&board));
    assert!(!is_draw(&board));
    assert_eq!(status(&board), GameStatus::Won(Player::X));
}

#[test]
fn test_draw_board() {
    // X O X / O X X / O X O - full, no line.
    let board = board_from(['X', 'O', 'X', 'O', 'X', 'X', 'O', 'X', 'O']);
    assert!(is_draw(&board));
    assert_eq!(status(&board), GameStatus::Draw);
}
