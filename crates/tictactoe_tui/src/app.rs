//! Application state and event handling.

use crate::input::{KeyAction, key_action, move_cursor};
use crate::layout::BoardLayout;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_rules::{Game, Session, ViewModel, render};
use tracing::{debug, info};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates an application around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: 4,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        self.session.game()
    }

    /// Keyboard cursor (cell index).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Projection drawn each frame.
    pub fn view(&self) -> ViewModel {
        render(self.session.game())
    }

    /// Handles a terminal event. `layout` must match the last drawn frame.
    pub fn handle_event(&mut self, event: Event, layout: &BoardLayout) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, layout),
            _ => {}
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let Some(action) = key_action(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            KeyAction::Place(index) => {
                self.cursor = index;
                self.place(index);
            }
            KeyAction::PlaceAtCursor => self.place(self.cursor),
            KeyAction::Cursor(code) => self.cursor = move_cursor(self.cursor, code),
            KeyAction::Reset => self.press_reset(),
            KeyAction::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse event; only left-button presses do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &BoardLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = layout.cell_at(mouse.column, mouse.row) {
            self.cursor = index;
            self.place(index);
        } else if layout.reset_hit(mouse.column, mouse.row) {
            self.press_reset();
        }
    }

    fn place(&mut self, index: usize) {
        self.session.place(index);
    }

    /// The reset button is inert until a mark has been placed.
    fn press_reset(&mut self) {
        if self.game().has_started() {
            self.session.reset();
        } else {
            debug!("Reset ignored before first move");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::new())
    }
}
