use super::{default_heading_levels, Config, DEFAULT_START_ITEM};
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.supported_heading_levels, default_heading_levels());
    assert_eq!(config.supported_heading_levels.len(), 6);
    assert_eq!(config.start_item_identifier, DEFAULT_START_ITEM);
    assert!(config.expanded_by_default);
    assert!(!config.use_numbering);
    assert!(!config.use_logging);
    assert_eq!(config.heading_levels().unwrap().len(), 6);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = Config::load_from(&dir.path().join("tocweave.toml")).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = NamedTempFile::new().unwrap();

    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn test_file_overrides_selected_fields() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "supported_heading_levels = [\"h1\", \"h2\", \"h3\"]\nuse_numbering = true\nstart_item_identifier = \"#content\""
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.supported_heading_levels, vec!["h1", "h2", "h3"]);
    assert!(config.use_numbering);
    assert_eq!(config.start_item_identifier, "#content");
    assert!(config.expanded_by_default);
    assert!(!config.use_logging);
}

#[test]
fn test_malformed_file_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "use_numbering = [unterminated").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_invalid_levels_fail_validation() {
    let config = Config {
        supported_heading_levels: vec!["h1".to_string(), "h1".to_string()],
        ..Config::default()
    };

    assert!(matches!(
        config.heading_levels(),
        Err(Error::InvalidHeadingLevels(_))
    ));
}
