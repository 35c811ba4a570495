//! Command-line interface for the oxo terminal client.

use clap::Parser;
use oxo_core::Player;
use std::path::PathBuf;

/// oxo - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play as this mark and skip the selection screen (x or o)
    #[arg(short, long, value_parser = parse_mark)]
    pub symbol: Option<Player>,

    /// Pause before the computer's reply, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub ai_delay_ms: u64,

    /// Pause before the board clears after a finished round, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub reset_delay_ms: u64,

    /// Trace output file (the terminal belongs to the UI)
    #[arg(long, default_value = "oxo.log")]
    pub log_file: PathBuf,
}

fn parse_mark(value: &str) -> Result<Player, String> {
    match value.to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" | "0" => Ok(Player::O),
        other => Err(format!("expected 'x' or 'o', got '{other}'")),
    }
}
