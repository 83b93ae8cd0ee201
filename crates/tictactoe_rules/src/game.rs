//! Turn state machine for tic-tac-toe.
//!
//! Only two operations mutate a game: [`Game::place`] and [`Game::reset`].
//! Whether the game is still running is derived from the board through
//! [`evaluate`] every time it is needed and is never stored.

use super::rules::{Outcome, evaluate};
use super::types::{Board, CELL_COUNT, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Rejection {
    #[display("index {} is off the board", _0)]
    OutOfRange(usize),
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    #[display("game is already over ({})", _0)]
    Finished(Outcome),
}

/// Board plus the mark to be placed next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Mark,
}

impl Game {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that will be placed next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.filled_count()
    }

    /// Returns true once any mark has been placed.
    pub fn has_started(&self) -> bool {
        self.move_count() > 0
    }

    /// Places the current mark at `index` (0-8) and passes the turn.
    ///
    /// Out-of-range indices, occupied cells and finished games leave the
    /// game untouched. Returns whether the mark was placed.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, index: usize) -> bool {
        match self.check(index) {
            Ok(()) => {
                self.board.place(index, self.turn);
                self.turn = self.turn.opponent();
                debug!(index, next = %self.turn, "Mark placed");
                true
            }
            Err(rejection) => {
                debug!(index, %rejection, "Placement ignored");
                false
            }
        }
    }

    fn check(&self, index: usize) -> Result<(), Rejection> {
        if index >= CELL_COUNT {
            return Err(Rejection::OutOfRange(index));
        }
        let outcome = self.outcome();
        if outcome.is_finished() {
            return Err(Rejection::Finished(outcome));
        }
        if !self.board.is_empty(index) {
            return Err(Rejection::Occupied(index));
        }
        Ok(())
    }

    /// Clears the board and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.move_count(), "Resetting game");
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
