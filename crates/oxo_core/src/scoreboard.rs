//! Win/draw tallies across rounds.

use crate::outcome::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Counters for a sitting: human wins, draws, AI wins.
///
/// Bumped exactly once per finished round. Scores survive round resets
/// and are dropped with the match on a full restart; nothing persists
/// across processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    human: u32,
    draws: u32,
    ai: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds the human has won.
    pub fn human(&self) -> u32 {
        self.human
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds the AI has won.
    pub fn ai(&self) -> u32 {
        self.ai
    }

    /// Tallies a finished round against the human's mark.
    pub fn record(&mut self, outcome: &Outcome, human_mark: Player) {
        match outcome.winner() {
            Some(winner) if winner == human_mark => self.human += 1,
            Some(_) => self.ai += 1,
            None => self.draws += 1,
        }
    }
}
