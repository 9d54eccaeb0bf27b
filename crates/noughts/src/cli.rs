//! Command-line interface for noughts.

use clap::Parser;
use std::path::PathBuf;

/// Noughts and crosses for the terminal, with persistent scores.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory the game state is stored in
    #[arg(long, default_value = "noughts_data")]
    pub data_dir: PathBuf,

    /// Keep state in memory only; nothing touches disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File tracing output is written to while the TUI owns the terminal
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
