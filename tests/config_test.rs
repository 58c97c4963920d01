//! Tests for loading the importer configuration

use snoonote_modnote::{Config, ConfigError, FailurePolicy, LengthUnit};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
max_note_length = 300
length_metric = "utf16"
failure_policy = "stop"
subreddit = "r/Techman"
"#,
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.max_note_length, 300);
    assert_eq!(config.length_metric, LengthUnit::Utf16);
    assert_eq!(config.failure_policy, FailurePolicy::Stop);

    let options = config.convert_options();
    assert_eq!(options.max_note_length, 300);
    assert_eq!(options.length_unit, LengthUnit::Utf16);
    assert_eq!(options.subreddit.as_deref(), Some("Techman"));
}

#[test]
fn test_load_rejects_zero_limit() {
    let file = write_config("max_note_length = 0\n");
    assert!(matches!(Config::load(file.path()), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_rejects_negative_limit() {
    let file = write_config("max_note_length = -5\n");
    assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_load_rejects_unknown_keys() {
    let file = write_config("max_note_lenght = 250\n");
    assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}
