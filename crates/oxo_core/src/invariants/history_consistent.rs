//! History consistency invariant: history and board agree.

use super::Invariant;
use crate::round::RoundInProgress;
use crate::types::Square;

/// Invariant: the history accounts for every occupied square.
///
/// The history length equals the occupied-square count, and every
/// recorded move matches the mark on the board at its position.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let occupied = round
            .board()
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();

        if round.history().len() != occupied {
            return false;
        }

        round
            .history()
            .iter()
            .all(|mov| round.board().get(mov.position) == Square::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "Move history accounts for every occupied square"
    }
}
