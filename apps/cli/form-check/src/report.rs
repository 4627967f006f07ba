//! JSON report printed after a check.

use form_model::Model;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// External name, dotted for sub-model attributes.
    pub attribute: String,
    pub label: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,
    pub errors: Vec<FieldErrors>,
}

impl Report {
    /// Collects errors from an already validated model, labelled through the model itself.
    pub fn from_model(valid: bool, model: &impl Model) -> Self {
        let errors = model
            .errors_by_attribute()
            .into_iter()
            .map(|(attribute, messages)| FieldErrors {
                label: model.get_attribute_label(&attribute),
                attribute,
                messages,
            })
            .collect();

        Self { valid, errors }
    }

    pub fn exit_code(&self) -> u8 {
        if self.valid { 0 } else { 1 }
    }
}
