//! Round outcomes.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A completed line: the winner and the three positions forming it.
///
/// The line is carried so frontends can highlight the winning cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player holding the line.
    pub player: Player,
    /// The three aligned positions, in scan order.
    pub line: [Position; 3],
}

/// Outcome of a finished round.
///
/// An ongoing round has no outcome; detectors return `Option<Outcome>`
/// and an in-progress round carries no outcome field at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Win),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(win) => Some(win.player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line details if there is a winner.
    pub fn win(&self) -> Option<&Win> {
        match self {
            Outcome::Winner(win) => Some(win),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(win) => write!(f, "Player {} wins", win.player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
