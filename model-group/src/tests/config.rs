// Unit tests for group config parsing and validation

use crate::{ConfigError, DelegatedWritePolicy, GroupConfig};

/// **VALUE**: Verifies an empty document yields the parity defaults.
///
/// **WHY THIS MATTERS**: The default must keep delegated writes unfiltered and local writes
/// safe-only, matching how groups have always behaved.
///
/// **BUG THIS CATCHES**: Would catch a changed `#[serde(default)]` flipping the policy.
#[test]
fn given_empty_toml_when_parsing_then_uses_defaults() {
    let config = GroupConfig::from_toml_str("").unwrap();

    assert_eq!(config, GroupConfig::default());
    assert_eq!(config.delegated_writes, DelegatedWritePolicy::Unfiltered);
    assert!(config.safe_only);
    assert_eq!(config.version, 1);
}

/// **VALUE**: Verifies snake_case policy names parse.
#[test]
fn given_safe_only_policy_when_parsing_then_policy_is_set() {
    let config = GroupConfig::from_toml_str(
        r#"
        delegated_writes = "safe_only"
        safe_only = false
        "#,
    )
    .unwrap();

    assert_eq!(config.delegated_writes, DelegatedWritePolicy::SafeOnly);
    assert!(!config.safe_only);
}

/// **VALUE**: Verifies malformed TOML and unknown policies surface as parse errors.
///
/// **BUG THIS CATCHES**: Would catch parse failures being swallowed into defaults.
#[test]
fn given_unknown_policy_when_parsing_then_returns_parse_error() {
    let result = GroupConfig::from_toml_str(r#"delegated_writes = "sometimes""#);

    match result.unwrap_err() {
        ConfigError::ParseError { path, .. } => {
            assert_eq!(path.to_string_lossy(), "<inline>");
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

/// **VALUE**: Verifies unsupported versions are rejected after parsing.
#[test]
fn given_future_version_when_parsing_then_returns_validation_error() {
    let result = GroupConfig::from_toml_str("version = 7");

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("Invalid version: 7"));
}
