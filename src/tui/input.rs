//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use unbeatable_tictactoe::Position;

/// Moves the cursor one square with an arrow key, clamped to the grid.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
