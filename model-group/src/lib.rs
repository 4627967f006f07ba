//! Group form model over named sub-models.
//!
//! [`ModelGroupForm`] routes `model.attribute` names to registered sub-models
//! and everything else to a local base model, so one form can bind, validate
//! and report on several models at once.

pub mod config;
pub mod error;
pub mod group;
pub mod path;

pub use config::{DelegatedWritePolicy, GroupConfig};
pub use error::ConfigError;
pub use group::ModelGroupForm;
pub use path::AttributePath;

pub use form_model::{AttributeValue, AttributeValues, Model, ModelError};

#[cfg(test)]
mod tests;
