//! Terminal frontend for oxo.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod orchestrator;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use oxo_core::{MatchEvent, Player, Position};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use app::App;
use orchestrator::{Orchestrator, Pacing, UiCommand};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting oxo");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &cli).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Outcome of a game-screen session.
enum GameExit {
    /// Back to the setup screen (dropping the match and its scores).
    Menu,
    /// Leave the application.
    Quit,
}

async fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cli: &cli::Cli,
) -> Result<()> {
    let pacing = Pacing {
        ai_delay: Duration::from_millis(cli.ai_delay_ms),
        reset_delay: Duration::from_millis(cli.reset_delay_ms),
    };
    let mut app = App::new();

    // The --symbol flag seeds only the first match; after a return to
    // the menu the setup screen takes over.
    let mut preset = cli.symbol;

    loop {
        let human = match preset.take() {
            Some(mark) => mark,
            None => match setup(terminal, &mut app)? {
                Some(mark) => mark,
                None => return Ok(()),
            },
        };

        info!(%human, "entering game screen");
        app.begin_match(human);

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(Orchestrator::new(human, pacing, cmd_rx, event_tx).run());

        let exit = game(terminal, &mut app, cmd_tx, &mut event_rx).await;
        worker.abort();

        match exit? {
            GameExit::Menu => app.to_menu(),
            GameExit::Quit => return Ok(()),
        }
    }
}

/// Symbol-selection screen. Returns the chosen mark, or None to quit.
fn setup<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<Option<Player>> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_picker(),
                    KeyCode::Char('x') | KeyCode::Char('X') => return Ok(Some(Player::X)),
                    KeyCode::Char('o') | KeyCode::Char('O') => return Ok(Some(Player::O)),
                    KeyCode::Enter => return Ok(Some(app.picker())),
                    _ => {}
                }
            }
        }
    }
}

/// Game-screen loop: render, apply orchestrator events, forward input.
async fn game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    cmd_tx: mpsc::UnboundedSender<UiCommand>,
    event_rx: &mut mpsc::UnboundedReceiver<MatchEvent>,
) -> Result<GameExit> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.on_match_event(event);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(GameExit::Quit),
                    KeyCode::Char('m') => return Ok(GameExit::Menu),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        let digit = c.to_digit(10).unwrap_or(0) as usize;
                        if (1..=9).contains(&digit) {
                            if let Some(pos) = Position::from_index(digit - 1) {
                                let _ = cmd_tx.send(UiCommand::Cell(pos));
                            }
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let _ = cmd_tx.send(UiCommand::Cell(app.cursor()));
                    }
                    code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                        app.move_cursor(code);
                    }
                    _ => {}
                }
            }
        }
    }
}
