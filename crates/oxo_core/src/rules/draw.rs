//! Draw detection.

use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
