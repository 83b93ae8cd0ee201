//! Winning-line overlay geometry.
//!
//! Coordinates are in board space: the origin is the top-left corner of the
//! board, `x` grows to the right and `y` grows downward, and each cell is
//! `cell_size` units square.

use super::rules::Triad;
use super::types::{SIDE, row_col};
use serde::{Deserialize, Serialize};

/// A point in board space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f64,
    /// Vertical offset from the top edge.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Segment struck through a winning triad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinLine {
    /// Start of the segment.
    pub start: Point,
    /// End of the segment.
    pub end: Point,
}

impl WinLine {
    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// Direction from start to end, in degrees clockwise from the x axis.
    pub fn angle_degrees(&self) -> f64 {
        (self.end.y - self.start.y)
            .atan2(self.end.x - self.start.x)
            .to_degrees()
    }

    /// Centre of the segment.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
}

/// Computes the overlay segment for a triad.
///
/// The row and column of the triad's first and last index decide the shape:
/// rows and columns span the board edge to edge through the cell centres,
/// diagonals run corner to corner.
pub fn win_line(triad: Triad, cell_size: f64) -> WinLine {
    let (r1, c1) = row_col(triad[0]);
    let (r2, c2) = row_col(triad[2]);
    let full = SIDE as f64 * cell_size;
    let centre = |n: usize| n as f64 * cell_size + cell_size / 2.0;

    let (start, end) = if r1 == r2 {
        let y = centre(r1);
        (Point::new(0.0, y), Point::new(full, y))
    } else if c1 == c2 {
        let x = centre(c1);
        (Point::new(x, 0.0), Point::new(x, full))
    } else if (r1, c1) == (0, 0) {
        (Point::new(0.0, 0.0), Point::new(full, full))
    } else {
        (Point::new(full, 0.0), Point::new(0.0, full))
    };

    WinLine { start, end }
}
