//! Alternating turn invariant: the sides take turns.

use super::Invariant;
use crate::round::RoundInProgress;

/// Invariant: recorded moves alternate sides and `to_move` matches
/// the parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let history = round.history();

        if history.is_empty() {
            return true;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let opener = history[0].player;
        let expected_next = if history.len() % 2 == 0 {
            opener
        } else {
            opener.opponent()
        };

        round.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Sides alternate turns"
    }
}
