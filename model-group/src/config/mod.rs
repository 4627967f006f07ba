use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_VERSION: u32 = 1;
const INLINE_SOURCE: &str = "<inline>";

// ============================================
// ENUMS WITH DEFAULTS
// ============================================

/// How writes addressed to sub-models (`model.attribute`) treat `safe_only`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DelegatedWritePolicy {
    /// Delegated writes ignore `safe_only`; only local writes are filtered.
    #[default]
    Unfiltered,
    /// With `safe_only`, a delegated write must target one of the sub-model's safe attributes.
    SafeOnly,
}

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub delegated_writes: DelegatedWritePolicy,

    /// Default `safe_only` flag for callers that mass-assign request input.
    #[serde(default = "default_safe_only")]
    pub safe_only: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            delegated_writes: DelegatedWritePolicy::default(),
            safe_only: default_safe_only(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_safe_only() -> bool {
    true
}

// ============================================
// IMPLEMENTATION
// ============================================

impl GroupConfig {
    /// Load a group config from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    #[track_caller]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(
                "Group config not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read group config: {e}");
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config = Self::parse(&contents, path)?;
        info!("Group config loaded from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text that did not come from a file.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new(INLINE_SOURCE))
    }

    #[track_caller]
    fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: GroupConfig =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: PathBuf::from(origin),
                reason: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an unsupported version.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        Ok(())
    }
}
