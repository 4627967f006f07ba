use model_group::{ConfigError, DelegatedWritePolicy, GroupConfig};

use std::fs;

use tempfile::TempDir;

/// **VALUE**: Verifies a config file on disk loads and validates.
///
/// **WHY THIS MATTERS**: Deployments flip the delegated write policy through this file.
///
/// **BUG THIS CATCHES**: Would catch `load` reading the file but returning defaults.
#[test]
fn given_config_file_when_loading_then_values_are_applied() {
    // GIVEN: A TOML file selecting the safe-only policy
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("group.toml");
    fs::write(&path, "version = 1\ndelegated_writes = \"safe_only\"\n").unwrap();

    // WHEN: Loading it
    let config = GroupConfig::load(&path).unwrap();

    // THEN: Policy comes from the file
    assert_eq!(config.delegated_writes, DelegatedWritePolicy::SafeOnly);
    assert!(config.safe_only);
}

/// **VALUE**: Verifies a missing file falls back to defaults.
#[test]
fn given_missing_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = GroupConfig::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, GroupConfig::default());
}

/// **VALUE**: Verifies a corrupt file is an error that names the file.
///
/// **BUG THIS CATCHES**: Would catch corrupt files silently loading as defaults.
#[test]
fn given_corrupt_file_when_loading_then_parse_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("group.toml");
    fs::write(&path, "delegated_writes = [").unwrap();

    let err = GroupConfig::load(&path).unwrap_err();

    match &err {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
    assert!(err.to_string().contains("group.toml"));
}

/// **VALUE**: Verifies a directory in place of the file is a read error.
#[test]
fn given_directory_path_when_loading_then_returns_read_error() {
    let dir = TempDir::new().unwrap();

    let err = GroupConfig::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadError { .. }));
}
