//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use super::draw::is_full;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices that win when all hold the same mark.
pub type Triad = [usize; 3];

/// Every winning triad: rows, then columns, then diagonals.
pub const WINNING_LINES: [Triad; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Result derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No triad completed and empty cells remain.
    InProgress,
    /// A mark completed a triad.
    Winner(Mark),
    /// Board full with no triad completed.
    Draw,
}

impl Outcome {
    /// Returns true once the game can accept no more moves.
    pub fn is_finished(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

fn holds(board: &Board, triad: Triad, mark: Mark) -> bool {
    triad
        .iter()
        .all(|&index| board.get(index) == Some(Cell::Occupied(mark)))
}

/// Finds the winner and the first triad it holds.
///
/// X is searched over all eight triads before O, so a board where both
/// marks hold a triad reports X.
#[instrument(skip(board))]
pub fn winning_triad(board: &Board) -> Option<(Mark, Triad)> {
    Mark::PRIORITY.into_iter().find_map(|mark| {
        WINNING_LINES
            .into_iter()
            .find(|&triad| holds(board, triad, mark))
            .map(|triad| (mark, triad))
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_triad(board).map(|(mark, _)| mark)
}

/// Maps a board to its outcome.
///
/// Any nine-cell board is accepted, including ones that cannot arise in
/// play; legality is not checked.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(mark) => Outcome::Winner(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
