//! Terminal tic-tac-toe board.
//!
//! Mouse clicks and key presses drive a [`tictactoe_rules::Session`]; every
//! frame is drawn from the pure [`tictactoe_rules::render`] projection.
//!
//! # Architecture
//!
//! - **App**: maps terminal events onto `place`/`reset`
//! - **Layout**: cell and button rectangles, shared by drawing and
//!   mouse hit-testing
//! - **Sound**: best-effort cues subscribed to game events
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod layout;
mod sound;
mod terminal;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{Config, ConfigError, SoundConfig};
pub use input::{KeyAction, key_action, move_cursor};
pub use layout::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};
pub use sound::{Cue, Playback, SoundCues};
pub use terminal::{init_tracing, run_tui};
pub use ui::draw;
