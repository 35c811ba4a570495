//! Drives the match controller around the frontend's timers.
//!
//! The controller itself is synchronous; everything time-shaped lives
//! here - the pause before the AI's reply and the pause before a
//! finished round's board clears. Input that arrives during a pause is
//! still fed through, and the controller's phase gate drops it.

use anyhow::Result;
use oxo_core::{Match, MatchCommand, MatchEvent, MatchPhase, Player, Position, Square};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Commands from the UI loop.
#[derive(Debug, Clone, Copy)]
pub enum UiCommand {
    /// The human picked a cell.
    Cell(Position),
}

/// The two cosmetic pauses.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Pause before the computer's reply.
    pub ai_delay: Duration,
    /// Pause before the board clears after a finished round.
    pub reset_delay: Duration,
}

/// Shorter pause when the AI opens a round on an empty board.
const OPENING_DELAY: Duration = Duration::from_millis(100);

/// Owns the match and runs it against the UI's channels.
pub struct Orchestrator {
    game: Match,
    pacing: Pacing,
    cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
    event_tx: mpsc::UnboundedSender<MatchEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh match.
    pub fn new(
        human: Player,
        pacing: Pacing,
        cmd_rx: mpsc::UnboundedReceiver<UiCommand>,
        event_tx: mpsc::UnboundedSender<MatchEvent>,
    ) -> Self {
        Self {
            game: Match::new(human),
            pacing,
            cmd_rx,
            event_tx,
        }
    }

    /// Runs the match until the UI hangs up.
    pub async fn run(mut self) -> Result<()> {
        info!("starting match orchestration");

        // Sync the UI with the fresh match.
        self.emit(vec![
            MatchEvent::BoardChanged(self.game.board().clone()),
            MatchEvent::ScoreChanged(self.game.scoreboard()),
        ])?;
        if self.game.phase() == MatchPhase::AiComputing {
            self.emit(vec![MatchEvent::AiThinking])?;
        }

        loop {
            match self.game.phase() {
                MatchPhase::AwaitingHuman => {
                    let Some(UiCommand::Cell(pos)) = self.cmd_rx.recv().await else {
                        debug!("ui closed the command channel");
                        return Ok(());
                    };
                    let events = self.game.handle(MatchCommand::CellChosen(pos));
                    self.emit(events)?;
                }
                MatchPhase::AiComputing => {
                    let delay = if self.board_is_empty() {
                        OPENING_DELAY
                    } else {
                        self.pacing.ai_delay
                    };
                    if !self.pause(delay).await? {
                        return Ok(());
                    }
                    let events = self.game.handle(MatchCommand::AiTurn);
                    self.emit(events)?;
                }
                MatchPhase::RoundOver => {
                    if !self.pause(self.pacing.reset_delay).await? {
                        return Ok(());
                    }
                    let events = self.game.handle(MatchCommand::NextRound);
                    self.emit(events)?;
                }
            }
        }
    }

    fn board_is_empty(&self) -> bool {
        self.game
            .board()
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    }

    /// Sleeps while still consuming input, so stale clicks reach the
    /// controller's phase gate instead of queueing up for the next
    /// turn. Returns false when the UI went away.
    async fn pause(&mut self, delay: Duration) -> Result<bool> {
        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => return Ok(true),
                cmd = self.cmd_rx.recv() => match cmd {
                    Some(UiCommand::Cell(pos)) => {
                        let events = self.game.handle(MatchCommand::CellChosen(pos));
                        self.emit(events)?;
                    }
                    None => return Ok(false),
                },
            }
        }
    }

    fn emit(&self, events: Vec<MatchEvent>) -> Result<()> {
        for event in events {
            self.event_tx.send(event)?;
        }
        Ok(())
    }
}
