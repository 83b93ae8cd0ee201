//! Best-effort sound cues driven by game events.
//!
//! Nothing here can fail a game: every problem is logged and the cue is
//! dropped.

use crate::config::SoundConfig;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tictactoe_rules::{GameEvent, GameListener};
use tracing::{debug, instrument, warn};

/// A sound the board can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Place,
    /// A game was won.
    Win,
    /// The board was cleared.
    Reset,
}

impl Cue {
    /// Cue for an event. Draws are silent.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Placed { .. } => Some(Cue::Place),
            GameEvent::Won { .. } => Some(Cue::Win),
            GameEvent::Reset => Some(Cue::Reset),
            GameEvent::Drawn => None,
        }
    }
}

/// What happened when a cue was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    /// Player process started; it is not waited on.
    Spawned,
    /// Terminal bell rung.
    Bell,
    /// Nothing played.
    Skipped(String),
}

/// Plays configured assets in response to [`GameEvent`]s.
#[derive(Debug, Clone)]
pub struct SoundCues {
    config: SoundConfig,
}

impl SoundCues {
    /// Creates cues from configuration.
    pub fn new(config: SoundConfig) -> Self {
        Self { config }
    }

    /// Asset configured for a cue.
    pub fn asset(&self, cue: Cue) -> &Path {
        match cue {
            Cue::Place => self.config.place().as_path(),
            Cue::Win => self.config.win().as_path(),
            Cue::Reset => self.config.reset().as_path(),
        }
    }

    /// Starts playing a cue without waiting for it to finish.
    #[instrument(skip(self))]
    pub fn play(&self, cue: Cue) -> Playback {
        if !*self.config.enabled() {
            return Playback::Skipped("sound disabled".to_string());
        }

        let Some(player) = self.config.player() else {
            return ring_bell();
        };

        let asset = self.asset(cue);
        if !asset.exists() {
            warn!(asset = %asset.display(), "Sound asset missing, skipping cue");
            return Playback::Skipped(format!("missing asset {}", asset.display()));
        }

        match Command::new(player)
            .arg(asset)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                debug!(pid = child.id(), "Sound player started");
                // Reap the player when it exits.
                std::thread::spawn(move || child.wait());
                Playback::Spawned
            }
            Err(e) => {
                warn!(%player, error = %e, "Failed to start sound player");
                Playback::Skipped(format!("failed to start {}: {}", player, e))
            }
        }
    }
}

fn ring_bell() -> Playback {
    let mut stdout = std::io::stdout();
    match stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
        Ok(()) => Playback::Bell,
        Err(e) => {
            warn!(error = %e, "Failed to ring terminal bell");
            Playback::Skipped(format!("bell failed: {}", e))
        }
    }
}

impl GameListener for SoundCues {
    fn on_event(&mut self, event: &GameEvent) {
        if let Some(cue) = Cue::for_event(event) {
            self.play(cue);
        }
    }
}
