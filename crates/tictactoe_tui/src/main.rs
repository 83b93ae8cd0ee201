//! Tic-tac-toe - terminal board

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, Config, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    config.apply_cli(&cli);

    init_tracing(config.log_file())?;
    info!(path = %cli.config.display(), ?config, "Configuration resolved");

    run_tui(config)
}
