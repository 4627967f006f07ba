//! Shared building blocks for the model-group workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking shared by every error type
//! - **form-model**: the `Model` capability and the reference `FormModel`
//! - **model-group**: `ModelGroupForm`, the dotted-path proxy over sub-models
//! - **form-check**: command-line driver wiring everything together

pub mod error;

pub use error::error_location::ErrorLocation;
