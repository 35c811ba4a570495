//! Tic-tac-toe rules, minimax search, and match control.
//!
//! # Architecture
//!
//! - **Rules**: pure evaluation of a board - completed lines, fullness,
//!   outcomes.
//! - **Round**: typestate lifecycle (`Setup` -> `InProgress` -> `Over`)
//!   with contract-checked moves.
//! - **Search**: exhaustive depth-aware minimax over the 9-cell tree.
//! - **Match**: the frontend boundary - commands in, events out, with
//!   the turn gate and score tallies.
//!
//! The crate is synchronous and has no I/O; frontends own scheduling
//! (input, AI think delays, board reset pauses) and feed the match
//! controller through [`MatchCommand`].
//!
//! # Example
//!
//! ```
//! use oxo_core::{Match, MatchCommand, MatchPhase, Player, Position};
//!
//! let mut game = Match::new(Player::X);
//! game.handle(MatchCommand::CellChosen(Position::Center));
//! assert_eq!(game.phase(), MatchPhase::AiComputing);
//!
//! game.handle(MatchCommand::AiTurn);
//! assert_eq!(game.phase(), MatchPhase::AwaitingHuman);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod outcome;
mod position;
mod round;
mod scoreboard;
mod session;
mod types;

// Public modules
pub mod invariants;
pub mod rules;
pub mod search;

// Crate-level exports - actions
pub use action::{Move, MoveError};

// Crate-level exports - contracts
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};

// Crate-level exports - outcomes
pub use outcome::{Outcome, Win};

// Crate-level exports - round lifecycle
pub use round::{Round, RoundInProgress, RoundOver, RoundSetup, RoundTransition};

// Crate-level exports - match control
pub use session::{Match, MatchCommand, MatchEvent, MatchPhase};

// Crate-level exports - scores
pub use scoreboard::Scoreboard;

// Crate-level exports - board types
pub use position::Position;
pub use types::{Board, Player, Square};
