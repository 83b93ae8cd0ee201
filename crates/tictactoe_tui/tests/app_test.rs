//! Event handling and rendering through the public API.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_rules::{Cell, Mark, Outcome};
use tictactoe_tui::{App, BoardLayout, draw};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 40;

fn layout() -> BoardLayout {
    BoardLayout::new(Rect::new(0, 0, WIDTH, HEIGHT))
}

fn click(app: &mut App, column: u16, row: u16) {
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
    app.handle_event(event, &layout());
}

fn click_cell(app: &mut App, index: usize) {
    let cell = layout().cells[index];
    click(app, cell.x + 2, cell.y + 1);
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_event(
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        &layout(),
    );
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_click_places_marks() {
    let mut app = App::default();
    click_cell(&mut app, 0);
    click_cell(&mut app, 4);
    assert_eq!(app.game().board().get(0), Some(Cell::Occupied(Mark::X)));
    assert_eq!(app.game().board().get(4), Some(Cell::Occupied(Mark::O)));
    assert_eq!(app.cursor(), 4);
}

#[test]
fn test_click_on_occupied_cell_ignored() {
    let mut app = App::default();
    click_cell(&mut app, 0);
    click_cell(&mut app, 0);
    assert_eq!(app.game().move_count(), 1);
    assert_eq!(app.game().turn(), Mark::O);
}

#[test]
fn test_right_click_and_release_ignored() {
    let mut app = App::default();
    let cell = layout().cells[0];
    for kind in [
        MouseEventKind::Down(MouseButton::Right),
        MouseEventKind::Up(MouseButton::Left),
        MouseEventKind::Moved,
    ] {
        let event = Event::Mouse(MouseEvent {
            kind,
            column: cell.x,
            row: cell.y,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_event(event, &layout());
    }
    assert_eq!(app.game().move_count(), 0);
}

#[test]
fn test_clicks_ignored_while_board_hidden() {
    let small = BoardLayout::new(Rect::new(0, 0, WIDTH, 20));
    assert!(!small.fits());

    let mut app = App::default();
    let centre = small.cells[4];
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: centre.x + 2,
        row: centre.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    app.handle_event(event, &small);
    assert_eq!(app.game().move_count(), 0);

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, 20)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Terminal too small"));
}

#[test]
fn test_reset_button_disabled_until_first_move() {
    let mut app = App::default();
    let reset = layout().reset;
    click(&mut app, reset.x + 1, reset.y + 1);
    assert_eq!(app.game().move_count(), 0);

    click_cell(&mut app, 8);
    click(&mut app, reset.x + 1, reset.y + 1);
    assert_eq!(app.game().move_count(), 0);
    assert_eq!(app.game().turn(), Mark::X);
}

#[test]
fn test_keyboard_play_to_win() {
    let mut app = App::default();
    // X: 1 2 3 (top row), O: 4 5
    for key in ['1', '4', '2', '5', '3'] {
        press(&mut app, KeyCode::Char(key));
    }
    assert_eq!(app.game().outcome(), Outcome::Winner(Mark::X));

    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.game().move_count(), 5);

    let text = screen(&app);
    assert!(text.contains("Winner: X!"));
    assert!(text.contains("5 moves"));
    assert!(text.contains("Play Again"));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.game().move_count(), 0);
    assert!(screen(&app).contains("Next player: X"));
}

#[test]
fn test_cursor_and_enter() {
    let mut app = App::default();
    assert_eq!(app.cursor(), 4);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().board().get(0), Some(Cell::Occupied(Mark::X)));
}

#[test]
fn test_quit() {
    let mut app = App::default();
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_tie_screen() {
    let mut app = App::default();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        click_cell(&mut app, index);
    }
    let text = screen(&app);
    assert!(text.contains("It's a tie!"));
    assert!(text.contains("9 moves"));
}
