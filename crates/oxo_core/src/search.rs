//! Exhaustive minimax move selection.
//!
//! The 9-cell tree is small enough to search to the bottom every time,
//! so there is no pruning and no caching. Terminal scores are
//! depth-aware: wins found sooner score higher, losses found later
//! score higher, which makes the engine close out won positions and
//! drag out lost ones.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Picks the strongest empty cell for `ai` on `board`.
///
/// Every empty cell is tried in scan order (index 0-8): place the mark,
/// search the remainder with the opponent to move, undo. The highest
/// score wins; ties keep the first cell encountered.
///
/// Returns `None` on a full or already-decided board. Callers gate on
/// the round phase and never pass one in.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Player) -> Option<Position> {
    if rules::evaluate(board).is_some() {
        return None;
    }

    let mut scratch = board.clone();
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(ai));
        let score = minimax(&mut scratch, ai, 0, false);
        scratch.clear(pos);

        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((pos, score)),
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "search complete");
    }

    best.map(|(pos, _)| pos)
}

/// Scores the side-to-move subtree below `board`.
///
/// `depth` counts plies after the root placement; `maximizing` is true
/// when `ai` is to move.
fn minimax(board: &mut Board, ai: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some(outcome) = rules::evaluate(board) {
        return match outcome.winner() {
            Some(winner) if winner == ai => 10 - depth,
            Some(_) => depth - 10,
            None => 0,
        };
    }

    let mover = if maximizing { ai } else { ai.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(mover));
        let score = minimax(board, ai, depth + 1, !maximizing);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
