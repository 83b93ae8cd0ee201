//! A game with post-transition hooks.
//!
//! [`Session`] forwards `place`/`reset` to its [`Game`] and notifies every
//! subscribed [`GameListener`] of what happened. Listeners see events after
//! the state change has been applied and cannot alter it.

use super::game::Game;
use super::rules::{Outcome, Triad, winning_triad};
use super::types::Mark;
use tracing::{debug, info, instrument};

/// Something that happened to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    Placed {
        /// Mark placed.
        mark: Mark,
        /// Cell index (0-8).
        index: usize,
        /// Marks on the board after this placement.
        move_count: usize,
    },
    /// The placement just made completed a triad.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Triad drawn by the overlay.
        triad: Triad,
    },
    /// The placement just made filled the board without a winner.
    Drawn,
    /// The board was cleared.
    Reset,
}

/// Observer of game events.
pub trait GameListener {
    /// Called after each transition, in the order events occur.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// A game session: one [`Game`] and the listeners interested in it.
#[derive(Default)]
pub struct Session {
    game: Game,
    listeners: Vec<Box<dyn GameListener>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Session {
    /// Creates a session around a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Adds a listener. Listeners are notified in subscription order.
    pub fn subscribe(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Places the current mark at `index`, then notifies listeners.
    ///
    /// Ignored placements emit nothing.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> bool {
        let mark = self.game.turn();
        if !self.game.place(index) {
            return false;
        }

        self.emit(GameEvent::Placed {
            mark,
            index,
            move_count: self.game.move_count(),
        });

        match self.game.outcome() {
            Outcome::Winner(_) => {
                if let Some((mark, triad)) = winning_triad(self.game.board()) {
                    info!(%mark, ?triad, "Game won");
                    self.emit(GameEvent::Won { mark, triad });
                }
            }
            Outcome::Draw => {
                info!("Game drawn");
                self.emit(GameEvent::Drawn);
            }
            Outcome::InProgress => {}
        }
        true
    }

    /// Resets the game, then notifies listeners.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.emit(GameEvent::Reset);
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, listeners = self.listeners.len(), "Emitting game event");
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}
