//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Position, Rect};
use tictactoe_rules::{CELL_COUNT, SIDE};
use tracing::instrument;

/// Columns per cell.
pub const CELL_WIDTH: u16 = 11;
/// Rows per cell.
pub const CELL_HEIGHT: u16 = 5;
/// Grid width including the two separator columns.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * SIDE as u16 + 2;
/// Grid height including the two separator rows.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * SIDE as u16 + 2;
/// Width of the reset button.
pub const RESET_WIDTH: u16 = 16;
/// Height of the reset button (bordered).
pub const RESET_HEIGHT: u16 = 3;

// status, counter, gap, board, gap, reset, help
const CONTENT_HEIGHT: u16 = 1 + 1 + 1 + BOARD_HEIGHT + 1 + RESET_HEIGHT + 1;

/// Rectangles of every on-screen element for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Whole terminal.
    pub area: Rect,
    /// Status line.
    pub status: Rect,
    /// Move counter line.
    pub counter: Rect,
    /// Grid, separators included.
    pub board: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; CELL_COUNT],
    /// Reset button.
    pub reset: Rect,
    /// Key help line.
    pub help: Rect,
}

impl BoardLayout {
    /// Centres the content in `area`.
    #[instrument]
    pub fn new(area: Rect) -> Self {
        let top = area.y + area.height.saturating_sub(CONTENT_HEIGHT) / 2;
        let line = |y: u16| Rect::new(area.x, y, area.width, 1).intersection(area);

        let board_x = area.x + area.width.saturating_sub(BOARD_WIDTH) / 2;
        let board_y = top + 3;
        let board = Rect::new(board_x, board_y, BOARD_WIDTH, BOARD_HEIGHT);

        let cells = std::array::from_fn(|index| {
            let (row, col) = ((index / SIDE) as u16, (index % SIDE) as u16);
            Rect::new(
                board_x + col * (CELL_WIDTH + 1),
                board_y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        let reset_y = board_y + BOARD_HEIGHT + 1;
        let reset = Rect::new(
            area.x + area.width.saturating_sub(RESET_WIDTH) / 2,
            reset_y,
            RESET_WIDTH,
            RESET_HEIGHT,
        );

        Self {
            area,
            status: line(top),
            counter: line(top + 1),
            board: board.intersection(area),
            cells,
            reset: reset.intersection(area),
            help: line(reset_y + RESET_HEIGHT),
        }
    }

    /// Returns true if the whole board fits in the terminal.
    pub fn fits(&self) -> bool {
        self.area.width >= BOARD_WIDTH && self.area.height >= CONTENT_HEIGHT
    }

    /// Cell index under a terminal position, if any.
    ///
    /// Nothing is hit while the board does not fit, since it is not drawn.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.fits() {
            return None;
        }
        let position = Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(position))
    }

    /// Returns true if the position is on the reset button.
    pub fn reset_hit(&self, column: u16, row: u16) -> bool {
        self.fits() && self.reset.contains(Position::new(column, row))
    }
}
