//! Unbeatable tic-tac-toe - terminal UI binary.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Log to a file if asked; logging to the terminal would fight the TUI.
    if let Some(path) = &cli.log_file {
        let log_file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
        info!(delay_ms = cli.delay_ms, "Starting unbeatable tic-tac-toe");
    }

    tui::run(Duration::from_millis(cli.delay_ms)).await
}
