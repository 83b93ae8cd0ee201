//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Rules are kept apart from the
//! turn state machine so they can be evaluated on any board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Outcome, Triad, WINNING_LINES, check_winner, evaluate, winning_triad};
