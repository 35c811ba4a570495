//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use oxo_core::Position;

/// Moves the cursor one cell, clamping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (mut row, mut col) = (cursor.row(), cursor.col());

    match key {
        KeyCode::Up => row = row.saturating_sub(1),
        KeyCode::Down => row = (row + 1).min(2),
        KeyCode::Left => col = col.saturating_sub(1),
        KeyCode::Right => col = (col + 1).min(2),
        _ => {}
    }

    Position::at(row, col).unwrap_or(cursor)
}
