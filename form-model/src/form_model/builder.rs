use crate::error::model_error::ModelError;
use crate::form_model::check::Check;
use crate::form_model::{Attribute, FormModel};
use crate::value::AttributeValue;

use regex::Regex;

/// Builder for one attribute of a [`FormModel`].
#[derive(Debug)]
pub struct AttributeBuilder {
    name: String,
    label: Option<String>,
    value: AttributeValue,
    safe: Option<bool>,
    checks: Vec<Check>,
    pattern_sources: Vec<String>,
}

impl AttributeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            value: AttributeValue::Null,
            safe: None,
            checks: Vec::new(),
            pattern_sources: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<AttributeValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Marks the attribute safe for mass assignment even without checks.
    pub fn safe(mut self) -> Self {
        self.safe = Some(true);
        self
    }

    /// Keeps the attribute out of mass assignment even when it has checks.
    pub fn unsafe_(mut self) -> Self {
        self.safe = Some(false);
        self
    }

    pub fn required(mut self) -> Self {
        self.checks.push(Check::Required);
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.checks.push(Check::Length { min, max });
        self
    }

    /// Compiled when the model is built.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern_sources.push(pattern.into());
        self
    }

    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    pub fn custom(mut self, message: impl Into<String>, check: fn(&AttributeValue) -> bool) -> Self {
        self.checks.push(Check::Custom {
            message: message.into(),
            check,
        });
        self
    }

    #[track_caller]
    fn build(self) -> Result<Attribute, ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::validation("Attribute name cannot be empty"));
        }

        if self.name.contains('.') {
            return Err(ModelError::validation(format!(
                "Attribute name cannot contain '.': {}",
                self.name
            )));
        }

        let mut checks = self.checks;
        for source in self.pattern_sources {
            // Not in a closure, so the location stays the caller of `build()`
            let pattern = match Regex::new(&source) {
                Ok(pattern) => pattern,
                Err(e) => return Err(ModelError::invalid_rule(&self.name, e.to_string())),
            };
            checks.push(Check::Pattern(pattern));
        }

        let safe = self.safe.unwrap_or(!checks.is_empty());

        Ok(Attribute {
            name: self.name,
            label: self.label,
            value: self.value,
            safe,
            checks,
        })
    }
}

/// Builder for validated [`FormModel`] instances.
#[derive(Debug)]
pub struct FormModelBuilder {
    name: String,
    attributes: Vec<AttributeBuilder>,
}

impl FormModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeBuilder) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Build the model, rejecting empty, dotted or duplicate names.
    #[track_caller]
    pub fn build(self) -> Result<FormModel, ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::validation("Model name cannot be empty"));
        }

        let mut attributes: Vec<Attribute> = Vec::with_capacity(self.attributes.len());
        for builder in self.attributes {
            let attribute = builder.build()?;
            if attributes.iter().any(|existing| existing.name == attribute.name) {
                return Err(ModelError::validation(format!(
                    "Duplicate attribute '{}' on model '{}'",
                    attribute.name, self.name
                )));
            }
            attributes.push(attribute);
        }

        Ok(FormModel::from_parts(self.name, attributes))
    }
}
