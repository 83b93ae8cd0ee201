//! Terminal setup and the event loop.

use crate::app::App;
use crate::config::Config;
use crate::layout::BoardLayout;
use crate::sound::SoundCues;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::path::Path;
use tictactoe_rules::Session;
use tracing::{debug, error, info, instrument, warn};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Sends trace output to `log_file` so it never lands on the game screen.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the board until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: Config) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut session = Session::new();
    session.subscribe(SoundCues::new(config.sounds().clone()));
    let mut app = App::new(session);

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_loop(&mut terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().move_count(), "Tic-tac-toe TUI stopped");
    res
}

/// Restores the terminal on drop, undoing only the setup steps that ran.
///
/// Held across the game loop so teardown also happens on early returns and
/// panics.
#[derive(Debug)]
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard<Stdout> {
    fn enter() -> Result<Self> {
        let mut guard = TerminalGuard::new(io::stdout());

        enable_raw_mode()?;
        guard.raw_mode = true;

        // Marked first: a failed write may still have switched screens.
        guard.alternate_screen = true;
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;

        Ok(guard)
    }
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            raw_mode: false,
            alternate_screen: false,
        }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!(
            raw_mode = self.raw_mode,
            alternate_screen = self.alternate_screen,
            "Restoring terminal"
        );

        if self.alternate_screen {
            if let Err(e) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
                warn!(error = %e, "Failed to leave alternate screen");
            }
        }

        if self.raw_mode {
            if let Err(e) = disable_raw_mode() {
                warn!(error = %e, "Failed to disable raw mode");
            }
        }
    }
}

/// Draws, then blocks for the next event; one event is handled per frame.
fn run_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let size = terminal.size()?;
        let layout = BoardLayout::new(Rect::new(0, 0, size.width, size.height));

        let event = event::read()?;
        debug!(?event, "Terminal event");
        app.handle_event(event, &layout);
    }
    Ok(())
}
