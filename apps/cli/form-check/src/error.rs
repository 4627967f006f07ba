use common::ErrorLocation;

use form_model::ModelError;
use model_group::ConfigError;

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a form check before a report can be produced.
///
/// Validation failures are not errors; they end up in the report.
#[derive(Debug, Error)]
pub enum FormCheckError {
    #[error("Input Error: {path}: {reason} {location}")]
    Input {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    /// Form definition could not be read or parsed
    #[error("Definition Error: {path}: {reason} {location}")]
    Definition {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Report could not be written
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FormCheckError {
    #[track_caller]
    pub fn input(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        FormCheckError::Input {
            path: path.into(),
            reason: reason.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn definition(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        FormCheckError::Definition {
            path: path.into(),
            reason: reason.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        FormCheckError::Logger {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn output(message: impl Into<String>) -> Self {
        FormCheckError::Output {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}
