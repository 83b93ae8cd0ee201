//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use crate::layout::{BoardLayout, CELL_HEIGHT, CELL_WIDTH};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use tictactoe_rules::{CELL_COUNT, Cell, Mark, SIDE, Status, UNIT_CELL, ViewModel, WinLine};

const GRID_COLOR: Color = Color::Magenta;
const LINE_COLOR: Color = Color::LightMagenta;

const X_ART: [&str; 3] = ["╲   ╱", "  ╳  ", "╱   ╲"];
const O_ART: [&str; 3] = ["╭───╮", "│   │", "╰───╯"];

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = BoardLayout::new(frame.area());
    if !layout.fits() {
        let warning = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(warning, frame.area());
        return;
    }

    let view = app.view();

    let status_style = match view.status {
        Status::NextPlayer(_) => Style::default().fg(Color::White),
        Status::Winner(_) => Style::default().fg(LINE_COLOR),
        Status::Tie => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(view.status.to_string())
            .style(status_style)
            .alignment(Alignment::Center),
        layout.status,
    );
    frame.render_widget(
        Paragraph::new(view.move_counter.as_str())
            .style(Style::default().fg(Color::LightMagenta))
            .alignment(Alignment::Center),
        layout.counter,
    );

    if !matches!(view.status, Status::Winner(_) | Status::Tie) {
        let cursor = layout.cells[app.cursor()];
        frame
            .buffer_mut()
            .set_style(cursor, Style::default().bg(Color::DarkGray));
    }
    draw_grid(frame.buffer_mut(), layout.board);

    if let Some(line) = view.win_line {
        draw_win_line(frame, layout.board, line);
    }
    draw_marks(frame.buffer_mut(), &layout, &view);

    draw_reset(frame, &layout, &view);
    frame.render_widget(
        Paragraph::new("click a cell or press 1-9 | arrows + enter | r reset | q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        layout.help,
    );
}

fn draw_grid(buf: &mut Buffer, board: Rect) {
    let style = Style::default().fg(GRID_COLOR);
    let rows = [board.y + CELL_HEIGHT, board.y + 2 * CELL_HEIGHT + 1];
    let cols = [board.x + CELL_WIDTH, board.x + 2 * CELL_WIDTH + 1];

    for y in rows {
        for x in board.left()..board.right() {
            let symbol = if cols.contains(&x) { "┼" } else { "─" };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
    for x in cols {
        for y in board.top()..board.bottom() {
            if rows.contains(&y) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("│").set_style(style);
            }
        }
    }
}

fn draw_win_line(frame: &mut Frame, board: Rect, line: WinLine) {
    // Canvas y grows upward; board space grows downward.
    let extent = UNIT_CELL * SIDE as f64;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, extent])
        .y_bounds([0.0, extent])
        .paint(move |ctx| {
            ctx.draw(&CanvasLine::new(
                line.start.x,
                extent - line.start.y,
                line.end.x,
                extent - line.end.y,
                LINE_COLOR,
            ));
        });
    frame.render_widget(canvas, board);
}

fn draw_marks(buf: &mut Buffer, layout: &BoardLayout, view: &ViewModel) {
    for index in 0..CELL_COUNT {
        let (art, color) = match view.cells[index] {
            Cell::Empty => continue,
            Cell::Occupied(Mark::X) => (X_ART, Color::Cyan),
            Cell::Occupied(Mark::O) => (O_ART, Color::White),
        };
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if view.win_triad.is_some_and(|triad| triad.contains(&index)) {
            style = style.fg(LINE_COLOR);
        }

        let area = layout.cells[index];
        let left = area.x + (CELL_WIDTH - 5) / 2;
        let top = area.y + (CELL_HEIGHT - 3) / 2;
        for (dy, row) in art.iter().enumerate() {
            // Spaces are skipped so the win line shows through.
            for (dx, symbol) in row.chars().enumerate() {
                if symbol == ' ' {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((left + dx as u16, top + dy as u16)) {
                    cell.set_char(symbol).set_style(style);
                }
            }
        }
    }
}

fn draw_reset(frame: &mut Frame, layout: &BoardLayout, view: &ViewModel) {
    let style = if view.reset.enabled {
        Style::default().fg(Color::White).bg(Color::Magenta)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    let button = Paragraph::new(view.reset.label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, layout.reset);
}
