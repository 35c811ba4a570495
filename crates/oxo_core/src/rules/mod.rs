//! Game rules.
//!
//! Pure functions for evaluating board state. Rules are separated from
//! board storage so the round machinery, the search engine, and tests
//! all share one detector.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::outcome::Outcome;
use crate::types::Board;

/// Evaluates a board: a win, a draw, or `None` while play continues.
///
/// Deterministic and side-effect free; evaluating the same board twice
/// yields identical results.
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(win) = check_winner(board) {
        return Some(Outcome::Winner(win));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
