//! The capability every model (and every model group) provides.

use crate::error::model_error::ModelError;
use crate::value::{AttributeValue, AttributeValues};

use log::warn;

/// Attribute access, validation, labels and error reporting for one model.
///
/// Implemented by [`crate::FormModel`], by model groups, and by `&mut M` for
/// any model so that a group can borrow sub-models for one request cycle.
pub trait Model {
    /// Declared attribute names, in declaration order.
    fn attribute_names(&self) -> Vec<String>;

    /// Attributes that may be mass-assigned from untrusted input.
    fn safe_attribute_names(&self) -> Vec<String>;

    /// Fails with [`ModelError::UndefinedAttribute`] for undeclared names.
    fn get_attribute(&self, name: &str) -> Result<AttributeValue, ModelError>;

    /// Fails with [`ModelError::UndefinedAttribute`] for undeclared names.
    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), ModelError>;

    /// Mass assignment.
    ///
    /// With `safe_only`, only names from [`Model::safe_attribute_names`] are
    /// assigned and the rest are reported as unsafe. Without it, every declared
    /// attribute is assigned. Undeclared names are skipped either way.
    fn set_attributes(
        &mut self,
        values: &AttributeValues,
        safe_only: bool,
    ) -> Result<(), ModelError> {
        let allowed = if safe_only {
            self.safe_attribute_names()
        } else {
            self.attribute_names()
        };

        for (name, value) in values {
            if allowed.iter().any(|candidate| candidate == name) {
                self.set_attribute(name, value.clone())?;
            } else if safe_only {
                warn!("Skipping unsafe attribute '{name}' during mass assignment");
            }
        }

        Ok(())
    }

    /// Runs validation and returns whether the model is free of errors afterwards.
    ///
    /// `attributes` restricts which attributes are checked; `clear_errors`
    /// drops previous messages first.
    fn validate(&mut self, attributes: Option<&[&str]>, clear_errors: bool) -> bool;

    /// Errors for one attribute, or for any attribute when `None`.
    fn has_errors(&self, attribute: Option<&str>) -> bool;

    /// Messages for one attribute, or all messages in attribute order when `None`.
    fn get_errors(&self, attribute: Option<&str>) -> Vec<String>;

    fn get_error(&self, attribute: &str) -> Option<String>;

    /// Messages grouped by attribute, ordered by each attribute's first error.
    fn errors_by_attribute(&self) -> Vec<(String, Vec<String>)>;

    fn get_attribute_label(&self, attribute: &str) -> String;
}

impl<M: Model + ?Sized> Model for &mut M {
    fn attribute_names(&self) -> Vec<String> {
        (**self).attribute_names()
    }

    fn safe_attribute_names(&self) -> Vec<String> {
        (**self).safe_attribute_names()
    }

    fn get_attribute(&self, name: &str) -> Result<AttributeValue, ModelError> {
        (**self).get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), ModelError> {
        (**self).set_attribute(name, value)
    }

    fn set_attributes(
        &mut self,
        values: &AttributeValues,
        safe_only: bool,
    ) -> Result<(), ModelError> {
        (**self).set_attributes(values, safe_only)
    }

    fn validate(&mut self, attributes: Option<&[&str]>, clear_errors: bool) -> bool {
        (**self).validate(attributes, clear_errors)
    }

    fn has_errors(&self, attribute: Option<&str>) -> bool {
        (**self).has_errors(attribute)
    }

    fn get_errors(&self, attribute: Option<&str>) -> Vec<String> {
        (**self).get_errors(attribute)
    }

    fn get_error(&self, attribute: &str) -> Option<String> {
        (**self).get_error(attribute)
    }

    fn errors_by_attribute(&self) -> Vec<(String, Vec<String>)> {
        (**self).errors_by_attribute()
    }

    fn get_attribute_label(&self, attribute: &str) -> String {
        (**self).get_attribute_label(attribute)
    }
}
