//! Match control: turn gating, AI scheduling, score tallies.
//!
//! [`Match`] is the boundary between the game core and a frontend.
//! Commands come in, events go out; the frontend never touches the
//! round directly. The `AiComputing` phase doubles as the turn gate:
//! human input arriving while the AI owns the turn is dropped here,
//! so no frontend scheduling mistake can corrupt a round.

use crate::action::Move;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::round::{Round, RoundSetup};
use crate::scoreboard::Scoreboard;
use crate::search;
use crate::types::{Board, Player};
use tracing::{debug, info, instrument};

/// Who is expected to act next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for the human to choose a cell.
    AwaitingHuman,
    /// The AI owns the turn; human input is dropped.
    AiComputing,
    /// The round has ended; waiting for the next round to begin.
    RoundOver,
}

/// Commands a frontend feeds into the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCommand {
    /// The human chose a cell.
    CellChosen(Position),
    /// Grant the AI its turn (after whatever cosmetic delay the
    /// frontend applies).
    AiTurn,
    /// Clear the board and start the next round, keeping scores.
    NextRound,
}

/// Events the match emits for the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// The board changed; a fresh snapshot to render.
    BoardChanged(Board),
    /// The AI owns the turn.
    AiThinking,
    /// A mark was placed.
    MovePlayed {
        /// The side that moved.
        mark: Player,
        /// Where the mark landed.
        position: Position,
    },
    /// The round finished.
    RoundEnded {
        /// How it ended; carries the winning line when there is one.
        outcome: Outcome,
    },
    /// The tallies changed.
    ScoreChanged(Scoreboard),
}

/// One sitting of human vs. AI: the current round plus the running
/// score. X opens every round; choosing a mark only decides which side
/// the human plays, so a match where the human picked O starts in
/// [`MatchPhase::AiComputing`].
#[derive(Debug)]
pub struct Match {
    round: Round,
    phase: MatchPhase,
    human: Player,
    ai: Player,
    scores: Scoreboard,
}

impl Match {
    /// Creates a match with the human playing the given mark.
    #[instrument]
    pub fn new(human: Player) -> Self {
        let ai = human.opponent();
        let phase = if ai == Player::X {
            MatchPhase::AiComputing
        } else {
            MatchPhase::AwaitingHuman
        };

        info!(%human, %ai, "match started");

        Self {
            round: RoundSetup::new().start(Player::X).into(),
            phase,
            human,
            ai,
            scores: Scoreboard::new(),
        }
    }

    /// Dispatches a command, returning the events it produced.
    ///
    /// Commands that arrive in the wrong phase are dropped without
    /// effect; trusted frontends filter most of them already, and the
    /// race between a click and the AI's turn is settled here.
    pub fn handle(&mut self, command: MatchCommand) -> Vec<MatchEvent> {
        match command {
            MatchCommand::CellChosen(position) => self.human_move(position),
            MatchCommand::AiTurn => self.ai_move(),
            MatchCommand::NextRound => self.next_round(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Returns the human's mark.
    pub fn human_mark(&self) -> Player {
        self.human
    }

    /// Returns the AI's mark.
    pub fn ai_mark(&self) -> Player {
        self.ai
    }

    /// Returns the running score.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the outcome of the current round, once it has ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.round.outcome()
    }

    fn human_move(&mut self, position: Position) -> Vec<MatchEvent> {
        if self.phase != MatchPhase::AwaitingHuman {
            debug!(%position, phase = ?self.phase, "dropping cell choice outside the human's turn");
            return Vec::new();
        }
        self.place(Move::new(self.human, position))
    }

    fn ai_move(&mut self) -> Vec<MatchEvent> {
        if self.phase != MatchPhase::AiComputing {
            debug!(phase = ?self.phase, "dropping AI turn outside AiComputing");
            return Vec::new();
        }

        // The phase gate guarantees an open, undecided board here.
        let Some(position) = search::best_move(self.round.board(), self.ai) else {
            debug!("no move available");
            return Vec::new();
        };
        self.place(Move::new(self.ai, position))
    }

    fn place(&mut self, action: Move) -> Vec<MatchEvent> {
        let Round::InProgress(round) = &self.round else {
            debug!(%action, "dropping move on a round that is not in progress");
            return Vec::new();
        };

        // play() consumes the round, so transition on a clone and keep
        // the original when the move is rejected.
        match round.clone().play(action) {
            Ok(transition) => {
                self.round = transition.into();
                let mut events = vec![
                    MatchEvent::MovePlayed {
                        mark: action.player,
                        position: action.position,
                    },
                    MatchEvent::BoardChanged(self.round.board().clone()),
                ];

                if let Some(outcome) = self.round.outcome().copied() {
                    info!(%outcome, "round ended");
                    self.scores.record(&outcome, self.human);
                    self.phase = MatchPhase::RoundOver;
                    events.push(MatchEvent::RoundEnded { outcome });
                    events.push(MatchEvent::ScoreChanged(self.scores));
                } else if action.player == self.human {
                    self.phase = MatchPhase::AiComputing;
                    events.push(MatchEvent::AiThinking);
                } else {
                    self.phase = MatchPhase::AwaitingHuman;
                }

                events
            }
            Err(err) => {
                // Occupied cell: ignore the input, per the original
                // click handling.
                debug!(%action, %err, "rejected move");
                Vec::new()
            }
        }
    }

    fn next_round(&mut self) -> Vec<MatchEvent> {
        if self.phase != MatchPhase::RoundOver {
            debug!(phase = ?self.phase, "dropping round reset while a round is live");
            return Vec::new();
        }

        self.round = RoundSetup::new().start(Player::X).into();
        self.phase = if self.ai == Player::X {
            MatchPhase::AiComputing
        } else {
            MatchPhase::AwaitingHuman
        };

        let mut events = vec![MatchEvent::BoardChanged(self.round.board().clone())];
        if self.phase == MatchPhase::AiComputing {
            events.push(MatchEvent::AiThinking);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive_until_human_turn(game: &mut Match) {
        while game.phase() == MatchPhase::AiComputing {
            game.handle(MatchCommand::AiTurn);
        }
    }

    #[test]
    fn test_human_x_starts_awaiting_human() {
        let game = Match::new(Player::X);
        assert_eq!(game.phase(), MatchPhase::AwaitingHuman);
    }

    #[test]
    fn test_human_o_starts_with_ai_turn() {
        let mut game = Match::new(Player::O);
        assert_eq!(game.phase(), MatchPhase::AiComputing);

        let events = game.handle(MatchCommand::AiTurn);
        assert!(events
            .iter()
            .any(|e| matches!(e, MatchEvent::MovePlayed { mark: Player::X, .. })));
        assert_eq!(game.phase(), MatchPhase::AwaitingHuman);
    }

    #[test]
    fn test_human_move_hands_turn_to_ai() {
        let mut game = Match::new(Player::X);
        let events = game.handle(MatchCommand::CellChosen(Position::Center));

        assert_eq!(game.phase(), MatchPhase::AiComputing);
        assert!(events.iter().any(|e| matches!(e, MatchEvent::AiThinking)));
    }

    #[test]
    fn test_occupied_cell_is_dropped() {
        let mut game = Match::new(Player::X);
        game.handle(MatchCommand::CellChosen(Position::Center));
        game.handle(MatchCommand::AiTurn);

        let before = game.board().clone();
        let events = game.handle(MatchCommand::CellChosen(Position::Center));

        assert!(events.is_empty());
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_cell_chosen_during_ai_turn_is_dropped() {
        let mut game = Match::new(Player::X);
        game.handle(MatchCommand::CellChosen(Position::Center));
        assert_eq!(game.phase(), MatchPhase::AiComputing);

        let events = game.handle(MatchCommand::CellChosen(Position::TopLeft));
        assert!(events.is_empty());
        assert!(game.board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_round_plays_to_scored_end() {
        let mut game = Match::new(Player::X);

        // Both sides play the engine's line; the round must end and
        // bump exactly one counter.
        loop {
            match game.phase() {
                MatchPhase::AwaitingHuman => {
                    let pos = search::best_move(game.board(), game.human_mark())
                        .expect("live round has a move");
                    game.handle(MatchCommand::CellChosen(pos));
                }
                MatchPhase::AiComputing => {
                    game.handle(MatchCommand::AiTurn);
                }
                MatchPhase::RoundOver => break,
            }
        }

        let scores = game.scoreboard();
        assert_eq!(scores.human() + scores.draws() + scores.ai(), 1);
        // Optimal play on both sides draws.
        assert_eq!(scores.draws(), 1);
    }

    #[test]
    fn test_next_round_keeps_scores_and_clears_board() {
        let mut game = Match::new(Player::O);

        // Let the AI open, then feed the human's replies from the
        // engine until the round ends.
        loop {
            match game.phase() {
                MatchPhase::AwaitingHuman => {
                    let pos = search::best_move(game.board(), game.human_mark())
                        .expect("live round has a move");
                    game.handle(MatchCommand::CellChosen(pos));
                }
                MatchPhase::AiComputing => {
                    game.handle(MatchCommand::AiTurn);
                }
                MatchPhase::RoundOver => break,
            }
        }

        let scores = game.scoreboard();
        let events = game.handle(MatchCommand::NextRound);

        assert_eq!(game.scoreboard(), scores);
        assert!(Position::ALL.iter().all(|&p| game.board().is_empty(p)));
        // AI plays X here, so it opens the new round too.
        assert_eq!(game.phase(), MatchPhase::AiComputing);
        assert!(events
            .iter()
            .any(|e| matches!(e, MatchEvent::BoardChanged(_))));

        drive_until_human_turn(&mut game);
        assert_eq!(game.phase(), MatchPhase::AwaitingHuman);
    }

    #[test]
    fn test_next_round_is_dropped_mid_round() {
        let mut game = Match::new(Player::X);
        game.handle(MatchCommand::CellChosen(Position::Center));

        let events = game.handle(MatchCommand::NextRound);
        assert!(events.is_empty());
        assert!(!game.board().is_empty(Position::Center));
    }

    #[test]
    fn test_cell_chosen_after_round_over_is_dropped() {
        let mut game = Match::new(Player::X);
        loop {
            match game.phase() {
                MatchPhase::AwaitingHuman => {
                    let pos = search::best_move(game.board(), game.human_mark())
                        .expect("live round has a move");
                    game.handle(MatchCommand::CellChosen(pos));
                }
                MatchPhase::AiComputing => {
                    game.handle(MatchCommand::AiTurn);
                }
                MatchPhase::RoundOver => break,
            }
        }

        let before = game.board().clone();
        let pos = Position::ALL
            .iter()
            .copied()
            .find(|&p| game.board().is_empty(p));
        // A drawn board is full; only probe when a cell is open.
        if let Some(pos) = pos {
            let events = game.handle(MatchCommand::CellChosen(pos));
            assert!(events.is_empty());
        }
        assert_eq!(game.board(), &before);
    }
}
