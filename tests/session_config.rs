//! Loading session configuration from disk

use std::io::Write;

use noughts::{Error, GameSession, Outcome, SessionConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_config_and_starts_session() {
    let file = write_config(
        r#"{ "player_one": "Ada", "player_two": "Computer", "automated": 1 }"#,
    );

    let config = SessionConfig::from_json_file(file.path()).unwrap();
    assert_eq!(
        config,
        SessionConfig::new("Ada", "Computer").with_automated(Some(1))
    );

    let mut session = GameSession::from_config(&config).unwrap();
    assert_eq!(session.automated_player().unwrap().name(), "Computer");
    assert_eq!(session.apply_move(1, 1).unwrap(), Outcome::InProgress);
    assert_eq!(session.board().occupied_count(), 2);
}

#[test]
fn config_round_trips_through_json() {
    let config = SessionConfig::new("Ada", "Grace");
    let file = write_config(&serde_json::to_string(&config).unwrap());

    assert_eq!(SessionConfig::from_json_file(file.path()).unwrap(), config);
}

#[test]
fn invalid_json_is_a_serialization_error() {
    let file = write_config("{ not json");
    assert!(matches!(
        SessionConfig::from_json_file(file.path()),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn invalid_config_is_rejected_at_session_creation() {
    let file = write_config(r#"{ "player_one": "", "automated": 0 }"#);
    let config = SessionConfig::from_json_file(file.path()).unwrap();

    assert!(matches!(
        GameSession::from_config(&config),
        Err(Error::InvalidPlayerName { index: 0 })
    ));
}
