//! Balanced board invariant: mark counts stay within one.

use super::Invariant;
use crate::round::RoundInProgress;

/// Invariant: the opener's mark count minus the other side's is 0 or 1.
///
/// Turns alternate, so the side that opened the round is always level
/// with or exactly one mark ahead of its opponent.
pub struct BalancedBoardInvariant;

impl Invariant<RoundInProgress> for BalancedBoardInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let opener = match round.history().first() {
            Some(mov) => mov.player,
            // No moves yet: the opener is whoever moves next.
            None => round.to_move(),
        };

        let lead = round.board().count(opener);
        let trail = round.board().count(opener.opponent());

        lead >= trail && lead - trail <= 1
    }

    fn description() -> &'static str {
        "The opening side's mark count leads by at most one"
    }
}
