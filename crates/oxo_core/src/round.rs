//! Round lifecycle as a typestate machine.
//!
//! Each phase is its own type with phase-specific fields, so invalid
//! operations are unrepresentable: a finished round has no `play`
//! method, and it ALWAYS has an outcome, not `Option<Outcome>`.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// A round ready to start. The board is always empty.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    board: Board,
}

impl RoundSetup {
    /// Creates a new round in the setup phase.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with the given opener (consumes setup).
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> RoundInProgress {
        RoundInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
        }
    }
}

impl Default for RoundSetup {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// A round in progress - can accept moves.
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
}

impl RoundInProgress {
    /// Plays a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions (square empty, mover's turn) are checked always;
    /// postconditions (round invariants) in debug builds.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] or [`MoveError::WrongPlayer`]
    /// when a precondition fails; the round is consumed either way, so
    /// callers that need to retry clone first.
    #[instrument(skip(self), fields(position = %action.position, player = %action.player))]
    pub fn play(self, action: Move) -> Result<RoundTransition, MoveError> {
        let before = self.clone();

        MoveContract::pre(&self, &action)?;

        let mut round = self;
        round
            .board
            .set(action.position, Square::Occupied(action.player));
        round.history.push(action);

        if let Some(outcome) = rules::evaluate(&round.board) {
            return Ok(RoundTransition::Over(RoundOver {
                board: round.board,
                history: round.history,
                outcome,
            }));
        }

        round.to_move = round.to_move.opponent();

        if cfg!(debug_assertions) {
            MoveContract::post(&before, &round)?;
        }

        Ok(RoundTransition::InProgress(round))
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays a move list from an empty board.
    #[instrument(skip(moves))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<RoundTransition, MoveError> {
        let mut round = RoundSetup::new().start(first_player);

        for action in moves {
            match round.play(*action)? {
                RoundTransition::InProgress(next) => round = next,
                RoundTransition::Over(over) => return Ok(RoundTransition::Over(over)),
            }
        }

        Ok(RoundTransition::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Over Phase
// ─────────────────────────────────────────────────────────────

/// A finished round - outcome determined.
#[derive(Debug, Clone)]
pub struct RoundOver {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl RoundOver {
    /// Returns the outcome. Never an Option - the phase guarantees it.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Clears the board for the next round (consumes the finished round).
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions and the by-value wrapper
// ─────────────────────────────────────────────────────────────

/// Result of playing a move.
#[derive(Debug)]
pub enum RoundTransition {
    /// The round continues.
    InProgress(RoundInProgress),
    /// The round finished.
    Over(RoundOver),
}

/// A round in whatever phase, for owners that hold one by value.
#[derive(Debug, Clone)]
pub enum Round {
    /// Not yet started.
    Setup(RoundSetup),
    /// Accepting moves.
    InProgress(RoundInProgress),
    /// Finished.
    Over(RoundOver),
}

impl Round {
    /// Returns the board regardless of phase.
    pub fn board(&self) -> &Board {
        match self {
            Round::Setup(round) => round.board(),
            Round::InProgress(round) => round.board(),
            Round::Over(round) => round.board(),
        }
    }

    /// Returns the side to move, if the round is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Round::InProgress(round) => Some(round.to_move()),
            _ => None,
        }
    }

    /// Returns the outcome, if the round is over.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Round::Over(round) => Some(round.outcome()),
            _ => None,
        }
    }

    /// Returns true once the round has finished.
    pub fn is_over(&self) -> bool {
        matches!(self, Round::Over(_))
    }
}

impl From<RoundSetup> for Round {
    fn from(round: RoundSetup) -> Self {
        Round::Setup(round)
    }
}

impl From<RoundInProgress> for Round {
    fn from(round: RoundInProgress) -> Self {
        Round::InProgress(round)
    }
}

impl From<RoundOver> for Round {
    fn from(round: RoundOver) -> Self {
        Round::Over(round)
    }
}

impl From<RoundTransition> for Round {
    fn from(transition: RoundTransition) -> Self {
        match transition {
            RoundTransition::InProgress(round) => Round::InProgress(round),
            RoundTransition::Over(round) => Round::Over(round),
        }
    }
}
