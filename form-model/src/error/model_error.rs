use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    /// Attribute is not declared on the model (the "undefined property" case).
    #[error("Undefined Attribute Error: {model}.{attribute} is not defined {location}")]
    UndefinedAttribute {
        model: String,
        attribute: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Rule Error: {attribute}: {reason} {location}")]
    InvalidRule {
        attribute: String,
        reason: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn undefined_attribute(model: impl Into<String>, attribute: impl Into<String>) -> Self {
        ModelError::UndefinedAttribute {
            model: model.into(),
            attribute: attribute.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ModelError::Validation {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_rule(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::InvalidRule {
            attribute: attribute.into(),
            reason: reason.into(),
            location: ErrorLocation::caller(),
        }
    }

    /// Attribute name for errors that concern a single attribute.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            ModelError::UndefinedAttribute { attribute, .. } => Some(attribute),
            ModelError::InvalidRule { attribute, .. } => Some(attribute),
            ModelError::Validation { .. } => None,
        }
    }
}
