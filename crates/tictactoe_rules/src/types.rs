//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (moves first, wins ties between impossible boards).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Marks in win-priority order.
    pub const PRIORITY: [Mark; 2] = [Mark::X, Mark::O];

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// 3x3 board, row-major (`index = row * 3 + col`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cells.
    ///
    /// No legality check is made; any combination of marks is accepted.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns true if `index` is on the board and holds no mark.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Writes a mark. Callers validate the index first.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Occupied(mark);
    }

    /// Formats the board as three lines of `X`, `O` and `.`.
    pub fn display(&self) -> String {
        self.cells
            .chunks(SIDE)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Occupied(Mark::X) => 'X',
                        Cell::Occupied(Mark::O) => 'O',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Converts a cell index to `(row, col)`.
pub fn row_col(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

/// Error parsing a board string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Expected {} cells, found {}", CELL_COUNT, _0)]
    Length(usize),
    /// A character that is neither a mark nor an empty marker.
    #[display("Unexpected character {:?} at cell {}", _0, _1)]
    Character(char, usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells: `X`/`x`, `O`/`o`, and `.`, `-`, `_` or space for
    /// empty. Newlines and `|` separators are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|')).collect();
        if symbols.len() != CELL_COUNT {
            return Err(ParseBoardError::Length(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => return Err(ParseBoardError::Character(other, index)),
            };
        }
        Ok(Self::from_cells(cells))
    }
}
