//! Noughts and crosses for the terminal.

use anyhow::Result;
use clap::Parser;
use noughts::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file so tracing output never fights the TUI for the
    // terminal.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting noughts");

    noughts::run_tui(&cli)
}
