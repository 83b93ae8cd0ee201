//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_rules::SIDE;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Place at a cell.
    Place(usize),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    Cursor(KeyCode),
    /// Press the reset button.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('r') => Some(KeyAction::Reset),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| KeyAction::Place(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::PlaceAtCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(KeyAction::Cursor(code))
        }
        _ => None,
    }
}

/// Moves the cursor with the arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / SIDE, cursor % SIDE);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIDE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIDE - 1)),
        _ => (row, col),
    };
    row * SIDE + col
}
