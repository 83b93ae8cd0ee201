//! Turn state machine and session hooks through the public API.

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_rules::{
    Cell, Game, GameEvent, GameListener, Mark, Outcome, Session, Status, render,
};

#[test]
fn test_second_place_on_same_cell_rejected() {
    let mut game = Game::new();
    assert!(game.place(0));
    assert!(!game.place(0));
    assert_eq!(game.board().get(0), Some(Cell::Occupied(Mark::X)));
    assert_eq!(game.turn(), Mark::O);
    assert_eq!(game.move_count(), 1);
}

#[test]
fn test_turn_alternates() {
    let mut game = Game::new();
    for (n, index) in [4, 0, 8, 2, 1, 7].into_iter().enumerate() {
        assert!(game.place(index));
        let expected = if (n + 1) % 2 == 1 { Mark::O } else { Mark::X };
        assert_eq!(game.turn(), expected, "after {} placements", n + 1);
    }
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new();
    for index in [4, 0, 8] {
        game.place(index);
    }
    game.reset();
    assert_eq!(game, Game::new());
    assert_eq!(game.turn(), Mark::X);
    assert!(game.board().cells().iter().all(|cell| cell.is_empty()));
}

#[test]
fn test_draw_game_blocks_further_moves() {
    // X O X / X O O / O X X
    let mut game = Game::new();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(game.place(index), "placing {}", index);
    }
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(render(&game).status, Status::Tie);
    assert_eq!(render(&game).reset.label, "Play Again");
}

#[test]
fn test_render_win_exposes_line() {
    let mut game = Game::new();
    for index in [2, 0, 4, 1, 6] {
        game.place(index);
    }
    let view = render(&game);
    assert_eq!(view.status.to_string(), "Winner: X!");
    assert_eq!(view.win_triad, Some([2, 4, 6]));
    let line = view.win_line.expect("win line");
    assert_eq!((line.start.x, line.start.y), (3.0, 0.0));
    assert_eq!((line.end.x, line.end.y), (0.0, 3.0));
    assert_eq!(view.move_counter, "5 moves");
    assert!(view.reset.enabled);
}

struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

impl GameListener for Recorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.0.borrow_mut().push(*event);
    }
}

#[test]
fn test_session_event_sequence() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new();
    session.subscribe(Recorder(Rc::clone(&events)));

    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        session.place(index);
    }
    session.place(0);
    session.reset();

    let events = events.borrow();
    let placed = events
        .iter()
        .filter(|event| matches!(event, GameEvent::Placed { .. }))
        .count();
    assert_eq!(placed, 9);
    assert_eq!(events[events.len() - 2], GameEvent::Drawn);
    assert_eq!(events[events.len() - 1], GameEvent::Reset);
    assert!(!events.iter().any(|event| matches!(event, GameEvent::Won { .. })));
}

#[test]
fn test_session_win_emitted_once() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new();
    session.subscribe(Recorder(Rc::clone(&events)));

    for index in [0, 3, 1, 4, 2, 5, 8] {
        session.place(index);
    }

    let wins: Vec<_> = events
        .borrow()
        .iter()
        .filter(|event| matches!(event, GameEvent::Won { .. }))
        .copied()
        .collect();
    assert_eq!(
        wins,
        vec![GameEvent::Won {
            mark: Mark::X,
            triad: [0, 1, 2]
        }]
    );
    assert_eq!(session.game().move_count(), 5);
}
