//! Command-line interface for the tic-tac-toe board.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal: click a cell to place a mark
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Disable sound cues
    #[arg(long)]
    pub mute: bool,

    /// Write trace output here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
