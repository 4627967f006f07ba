//! In-memory reference model: declared attributes, explicit safety, checks and labels.

pub mod builder;
pub mod check;

pub use builder::{AttributeBuilder, FormModelBuilder};
pub use check::Check;

use crate::error::model_error::ModelError;
use crate::error_bag::ErrorBag;
use crate::label::generate_attribute_label;
use crate::model::Model;
use crate::value::AttributeValue;

use log::{debug, trace};

#[derive(Debug, Clone)]
pub(crate) struct Attribute {
    pub(crate) name: String,
    pub(crate) label: Option<String>,
    pub(crate) value: AttributeValue,
    pub(crate) safe: bool,
    pub(crate) checks: Vec<Check>,
}

/// A named model holding its own attribute values and validation messages.
#[derive(Debug, Clone)]
pub struct FormModel {
    name: String,
    attributes: Vec<Attribute>,
    errors: ErrorBag,
}

impl FormModel {
    pub fn builder(name: impl Into<String>) -> FormModelBuilder {
        FormModelBuilder::new(name)
    }

    pub(crate) fn from_parts(name: String, attributes: Vec<Attribute>) -> Self {
        Self {
            name,
            attributes,
            errors: ErrorBag::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Records a message without running any check.
    pub fn add_error(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.errors.add(attribute, message);
    }

    pub fn clear_errors(&mut self, attribute: Option<&str>) {
        self.errors.clear(attribute);
    }

    pub fn errors(&self) -> &ErrorBag {
        &self.errors
    }

    fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    fn label_of(attribute: &Attribute) -> String {
        attribute
            .label
            .clone()
            .unwrap_or_else(|| generate_attribute_label(&attribute.name))
    }
}

impl Model for FormModel {
    fn attribute_names(&self) -> Vec<String> {
        self.attributes
            .iter()
            .map(|attribute| attribute.name.clone())
            .collect()
    }

    fn safe_attribute_names(&self) -> Vec<String> {
        self.attributes
            .iter()
            .filter(|attribute| attribute.safe)
            .map(|attribute| attribute.name.clone())
            .collect()
    }

    #[track_caller]
    fn get_attribute(&self, name: &str) -> Result<AttributeValue, ModelError> {
        match self.attribute(name) {
            Some(attribute) => Ok(attribute.value.clone()),
            None => Err(ModelError::undefined_attribute(&self.name, name)),
        }
    }

    #[track_caller]
    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), ModelError> {
        let Some(attribute) = self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        else {
            return Err(ModelError::undefined_attribute(&self.name, name));
        };

        trace!("{}.{name} = {value}", self.name);
        attribute.value = value;
        Ok(())
    }

    fn validate(&mut self, attributes: Option<&[&str]>, clear_errors: bool) -> bool {
        if clear_errors {
            self.errors.clear(None);
        }

        let mut failures = Vec::new();
        for attribute in &self.attributes {
            if attributes.is_some_and(|wanted| !wanted.contains(&attribute.name.as_str())) {
                continue;
            }

            let label = Self::label_of(attribute);
            for check in &attribute.checks {
                if let Some(message) = check.run(&label, &attribute.value) {
                    failures.push((attribute.name.clone(), message));
                }
            }
        }

        for (attribute, message) in failures {
            self.errors.add(attribute, message);
        }

        let valid = self.errors.is_empty();
        debug!("Validated model '{}': valid={valid}", self.name);
        valid
    }

    fn has_errors(&self, attribute: Option<&str>) -> bool {
        self.errors.has(attribute)
    }

    fn get_errors(&self, attribute: Option<&str>) -> Vec<String> {
        self.errors.messages(attribute)
    }

    fn get_error(&self, attribute: &str) -> Option<String> {
        self.errors.first(attribute)
    }

    fn errors_by_attribute(&self) -> Vec<(String, Vec<String>)> {
        self.errors.entries().to_vec()
    }

    fn get_attribute_label(&self, attribute: &str) -> String {
        match self.attribute(attribute) {
            Some(declared) => Self::label_of(declared),
            None => generate_attribute_label(attribute),
        }
    }
}
