//! Model capability and reference form model.
//!
//! [`Model`] is the contract a model group composes: attribute access, mass
//! assignment filtered by safety, validation, error reporting and labels.
//! [`FormModel`] is a small in-memory implementation of it with declared
//! attributes and a handful of checks.

pub mod error;
pub mod error_bag;
pub mod form_model;
pub mod label;
pub mod model;
pub mod value;

pub use error::model_error::ModelError;
pub use error_bag::ErrorBag;
pub use form_model::{AttributeBuilder, Check, FormModel, FormModelBuilder};
pub use label::generate_attribute_label;
pub use model::Model;
pub use value::{AttributeValue, AttributeValues, is_empty_value};

#[cfg(test)]
mod tests;
