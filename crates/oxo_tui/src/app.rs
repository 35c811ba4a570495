//! Application state and logic.

use crate::input;
use crossterm::event::KeyCode;
use oxo_core::{Board, MatchEvent, Player, Position, Scoreboard};
use tracing::debug;

/// Which screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Symbol selection.
    Setup,
    /// The board.
    Game,
}

/// Main application state.
///
/// The orchestrator owns the match; this struct only mirrors what the
/// events carry, plus purely local state (screen, cursor, status line).
pub struct App {
    screen: Screen,
    picker: Player,
    human: Player,
    ai: Player,
    board: Board,
    scores: Scoreboard,
    cursor: Position,
    win_line: Option<[Position; 3]>,
    round_over: bool,
    status: String,
}

impl App {
    /// Creates a new application on the setup screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Setup,
            picker: Player::X,
            human: Player::X,
            ai: Player::O,
            board: Board::new(),
            scores: Scoreboard::new(),
            cursor: Position::Center,
            win_line: None,
            round_over: false,
            status: String::new(),
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Mark highlighted on the setup screen.
    pub fn picker(&self) -> Player {
        self.picker
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The AI's mark.
    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Board snapshot to render.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Running score.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The winning line of a just-finished round, if any.
    pub fn win_line(&self) -> Option<[Position; 3]> {
        self.win_line
    }

    /// Status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Flips the highlighted mark on the setup screen.
    pub fn toggle_picker(&mut self) {
        self.picker = self.picker.opponent();
    }

    /// Leaves the setup screen and binds the marks for a fresh match.
    pub fn begin_match(&mut self, human: Player) {
        self.screen = Screen::Game;
        self.human = human;
        self.ai = human.opponent();
        self.board = Board::new();
        self.scores = Scoreboard::new();
        self.cursor = Position::Center;
        self.win_line = None;
        self.round_over = false;
        self.status = "Your turn.".to_string();
    }

    /// Returns to the symbol-selection screen; the caller drops the
    /// match, which is what zeroes the score.
    pub fn to_menu(&mut self) {
        self.screen = Screen::Setup;
        self.picker = self.human;
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Applies an orchestrator event to the view state.
    pub fn on_match_event(&mut self, event: MatchEvent) {
        debug!(?event, "handling match event");

        match event {
            MatchEvent::BoardChanged(board) => {
                self.board = board;
                self.win_line = None;
                if self.round_over {
                    // A fresh round just started.
                    self.round_over = false;
                    self.status = "Your turn.".to_string();
                }
            }
            MatchEvent::AiThinking => {
                self.status = "AI is thinking...".to_string();
            }
            MatchEvent::MovePlayed { mark, position } => {
                self.status = if mark == self.human {
                    format!("You played {}.", position.label())
                } else {
                    format!("AI played {}. Your turn.", position.label())
                };
            }
            MatchEvent::RoundEnded { outcome } => {
                self.round_over = true;
                self.win_line = outcome.win().map(|w| w.line);
                self.status = match outcome.winner() {
                    Some(winner) if winner == self.human => "You win!".to_string(),
                    Some(_) => "AI wins.".to_string(),
                    None => "A draw.".to_string(),
                };
            }
            MatchEvent::ScoreChanged(scores) => {
                self.scores = scores;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
