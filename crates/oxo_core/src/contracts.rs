//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! formalizing the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::round::RoundInProgress;

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Validates that the target square is empty.
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if !round.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Validates that the mover is the side to move.
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if mov.player != round.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the square is empty and it's the mover's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, round)?;
        PlayersTurn::check(mov, round)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: square empty, mover's turn.
/// Postconditions: the round invariants still hold.
pub struct MoveContract;

impl Contract<RoundInProgress, Move> for MoveContract {
    fn pre(round: &RoundInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, round)
    }

    fn post(_before: &RoundInProgress, after: &RoundInProgress) -> Result<(), MoveError> {
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
