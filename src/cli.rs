//! Command-line interface for the game.

use clap::Parser;
use std::path::PathBuf;

/// Unbeatable tic-tac-toe - play X against an optimal computer opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Single-player tic-tac-toe against an optimal minimax opponent")]
#[command(version)]
pub struct Cli {
    /// Milliseconds the computer "thinks" before moving
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Write tracing output to this file (the TUI owns the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
