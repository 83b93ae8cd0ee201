//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] maps any board to an [`Outcome`] by checking the
//!   eight [`WINNING_LINES`], X before O
//! - **Game**: the turn state machine; [`Game::place`] and [`Game::reset`]
//!   are its only transitions
//! - **Session**: a game plus [`GameListener`] hooks for side effects
//! - **View**: [`render`] projects a game into a [`ViewModel`], including the
//!   [`WinLine`] struck through a winning triad
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.place(index);
//! }
//! assert_eq!(game.outcome(), Outcome::Winner(Mark::X));
//! assert!(!game.place(8));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod geometry;
mod rules;
mod session;
mod types;
mod view;

pub use game::Game;
pub use geometry::{Point, WinLine, win_line};
pub use rules::{
    Outcome, Triad, WINNING_LINES, check_winner, evaluate, is_draw, is_full, winning_triad,
};
pub use session::{GameEvent, GameListener, Session};
pub use types::{Board, CELL_COUNT, Cell, Mark, ParseBoardError, SIDE, row_col};
pub use view::{ResetControl, Status, UNIT_CELL, ViewModel, glyph, move_counter, render};
