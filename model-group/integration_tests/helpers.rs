//! Test helpers for model group integration tests.
//!
//! - Ready-made `FormModel` fixtures (a signup form and an address)
//! - `RecordingModel`, a `Model` that records how the group called it
//! - Value map construction from `json!` literals

use form_model::{
    AttributeBuilder, AttributeValue, AttributeValues, FormModel, Model, ModelError,
};

/// Local signup form: `email` is checked (safe), `role` is unchecked (unsafe).
pub fn signup_form() -> FormModel {
    FormModel::builder("signup")
        .with_attribute(AttributeBuilder::new("email").required())
        .with_attribute(AttributeBuilder::new("role").with_value("member"))
        .build()
        .expect("signup fixture should build")
}

/// Address sub-model: `city` required, `zip` required with a pattern, `internal_code` unsafe.
pub fn address() -> FormModel {
    FormModel::builder("address")
        .with_attribute(AttributeBuilder::new("city").required())
        .with_attribute(
            AttributeBuilder::new("zip")
                .with_label("Postal code")
                .required()
                .pattern(r"^\d{4}$"),
        )
        .with_attribute(AttributeBuilder::new("internal_code"))
        .build()
        .expect("address fixture should build")
}

/// Build an attribute map from a JSON object literal.
pub fn values(object: AttributeValue) -> AttributeValues {
    object
        .as_object()
        .cloned()
        .expect("values() needs a JSON object")
}

/// A model that records calls and returns scripted results.
#[derive(Debug, Default)]
pub struct RecordingModel {
    pub valid: bool,
    pub validate_calls: usize,
    pub validate_attributes: Vec<Option<Vec<String>>>,
    pub validate_clear_flags: Vec<bool>,
    pub errors: Vec<(String, String)>,
}

impl RecordingModel {
    pub fn valid() -> Self {
        Self {
            valid: true,
            ..Self::default()
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            ..Self::default()
        }
    }

    pub fn with_error(mut self, attribute: &str, message: &str) -> Self {
        self.errors
            .push((String::from(attribute), String::from(message)));
        self
    }
}

impl Model for RecordingModel {
    fn attribute_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn safe_attribute_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn get_attribute(&self, name: &str) -> Result<AttributeValue, ModelError> {
        Err(ModelError::undefined_attribute("recording", name))
    }

    fn set_attribute(&mut self, name: &str, _value: AttributeValue) -> Result<(), ModelError> {
        Err(ModelError::undefined_attribute("recording", name))
    }

    fn validate(&mut self, attributes: Option<&[&str]>, clear_errors: bool) -> bool {
        self.validate_calls += 1;
        self.validate_attributes.push(
            attributes.map(|names| names.iter().map(|name| name.to_string()).collect()),
        );
        self.validate_clear_flags.push(clear_errors);
        self.valid
    }

    fn has_errors(&self, attribute: Option<&str>) -> bool {
        !self.get_errors(attribute).is_empty()
    }

    fn get_errors(&self, attribute: Option<&str>) -> Vec<String> {
        self.errors
            .iter()
            .filter(|(name, _)| attribute.is_none_or(|wanted| name == wanted))
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn get_error(&self, attribute: &str) -> Option<String> {
        self.get_errors(Some(attribute)).into_iter().next()
    }

    fn errors_by_attribute(&self) -> Vec<(String, Vec<String>)> {
        self.errors
            .iter()
            .map(|(name, message)| (name.clone(), vec![message.clone()]))
            .collect()
    }

    fn get_attribute_label(&self, attribute: &str) -> String {
        format!("Recorded {attribute}")
    }
}
