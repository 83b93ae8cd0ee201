//! Frontend configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Sound cue settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Play cues at all.
    enabled: bool,

    /// Command run with the asset path as its only argument.
    /// Without one, cues ring the terminal bell.
    player: Option<String>,

    /// Asset played after a mark is placed.
    place: PathBuf,

    /// Asset played when a game is won.
    win: PathBuf,

    /// Asset played when the board is reset.
    reset: PathBuf,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            player: None,
            place: PathBuf::from("sounds/place.mp3"),
            win: PathBuf::from("sounds/win.mp3"),
            reset: PathBuf::from("sounds/reset.mp3"),
        }
    }
}

impl SoundConfig {
    /// Turns every cue off.
    pub fn mute(&mut self) {
        self.enabled = false;
    }

    /// Sets the player command.
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File receiving trace output.
    log_file: PathBuf,

    /// Sound cue settings.
    sounds: SoundConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            sounds: SoundConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip_all)]
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.mute {
            debug!("Sound cues muted from command line");
            self.sounds.mute();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
