//! Config file loading.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_tui::{Config, Cue, Playback, SoundCues};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "game.log"

[sounds]
enabled = false
reset = "click.wav"
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert!(!*config.sounds().enabled());
    assert_eq!(config.sounds().reset(), &PathBuf::from("click.wav"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sounds\nenabled = ").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_configured_player_spawns() {
    let dir = tempfile::tempdir().unwrap();
    let asset = dir.path().join("place.wav");
    std::fs::write(&asset, b"").unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[sounds]\nplayer = \"true\"\nplace = {:?}",
        asset.display().to_string()
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let cues = SoundCues::new(config.sounds().clone());
    assert_eq!(cues.play(Cue::Place), Playback::Spawned);
}

#[test]
fn test_unknown_player_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let asset = dir.path().join("win.wav");
    std::fs::write(&asset, b"").unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[sounds]\nplayer = \"no-such-sound-player-binary\"\nwin = {:?}",
        asset.display().to_string()
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let cues = SoundCues::new(config.sounds().clone());
    assert!(matches!(cues.play(Cue::Win), Playback::Skipped(_)));
}
