//! Renderable projection of a game.
//!
//! [`render`] is a pure function of the [`Game`]; frontends draw the
//! resulting [`ViewModel`] and never inspect game state directly.

use super::game::Game;
use super::geometry::{WinLine, win_line};
use super::rules::{Outcome, Triad, winning_triad};
use super::types::{CELL_COUNT, Cell, Mark};
use serde::{Deserialize, Serialize};

/// Cell size used for [`ViewModel::win_line`]: the board spans `0.0..=3.0`.
pub const UNIT_CELL: f64 = 1.0;

/// Headline shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game running; this mark moves next.
    NextPlayer(Mark),
    /// Game won.
    Winner(Mark),
    /// Board full without a winner.
    Tie,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
            Status::Winner(mark) => write!(f, "Winner: {}!", mark),
            Status::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// State of the reset control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResetControl {
    /// Button caption.
    pub label: &'static str,
    /// Clickable only once a mark is on the board.
    pub enabled: bool,
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// Headline.
    pub status: Status,
    /// Move counter caption.
    pub move_counter: String,
    /// Cells in row-major order.
    pub cells: [Cell; CELL_COUNT],
    /// Triad completed by the winner, if any.
    pub win_triad: Option<Triad>,
    /// Overlay segment for `win_triad`, in [`UNIT_CELL`] board space.
    pub win_line: Option<WinLine>,
    /// Reset control.
    pub reset: ResetControl,
}

/// Text drawn for a cell.
pub fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "",
        Cell::Occupied(Mark::X) => "X",
        Cell::Occupied(Mark::O) => "O",
    }
}

/// Caption for the number of marks placed.
pub fn move_counter(moves: usize) -> String {
    match moves {
        0 => "No moves yet".to_string(),
        1 => "1 move".to_string(),
        n => format!("{} moves", n),
    }
}

/// Projects a game into a view model.
pub fn render(game: &Game) -> ViewModel {
    let outcome = game.outcome();
    let status = match outcome {
        Outcome::InProgress => Status::NextPlayer(game.turn()),
        Outcome::Winner(mark) => Status::Winner(mark),
        Outcome::Draw => Status::Tie,
    };
    let win_triad = winning_triad(game.board()).map(|(_, triad)| triad);

    ViewModel {
        status,
        move_counter: move_counter(game.move_count()),
        cells: *game.board().cells(),
        win_triad,
        win_line: win_triad.map(|triad| win_line(triad, UNIT_CELL)),
        reset: ResetControl {
            label: if outcome.is_finished() {
                "Play Again"
            } else {
                "Restart"
            },
            enabled: game.has_started(),
        },
    }
}
