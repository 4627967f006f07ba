//! A form model that fronts a set of named sub-models.

use crate::config::{DelegatedWritePolicy, GroupConfig};
use crate::path::AttributePath;

use form_model::{AttributeValue, AttributeValues, FormModel, Model, ModelError};

use log::{debug, warn};

/// Proxies attribute access, validation, labels and errors to named sub-models.
///
/// Names of the form `model.attribute` are routed to the sub-model registered
/// as `model`; everything else, including dotted names whose model is not
/// registered, is handled by the local `base` model.
///
/// Sub-models are boxed trait objects bounded by `'a`, so a group can borrow
/// them (`&'a mut M`) for one set/validate/report cycle and hand them back.
pub struct ModelGroupForm<'a, B: Model = FormModel> {
    base: B,
    models: Vec<(String, Box<dyn Model + 'a>)>,
    config: GroupConfig,
}

impl<'a, B: Model> ModelGroupForm<'a, B> {
    pub fn new(base: B) -> Self {
        Self {
            base,
            models: Vec::new(),
            config: GroupConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GroupConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_model<M: Model + 'a>(mut self, name: impl Into<String>, model: M) -> Self {
        self.add_model(name, model);
        self
    }

    /// Registers `model` under `name`.
    ///
    /// An existing model with the same name is replaced in place, keeping its
    /// position in validation and error order, and is returned.
    pub fn add_model<M: Model + 'a>(
        &mut self,
        name: impl Into<String>,
        model: M,
    ) -> Option<Box<dyn Model + 'a>> {
        let name = name.into();
        let model: Box<dyn Model + 'a> = Box::new(model);

        match self.position(&name) {
            Some(index) => {
                debug!("Replacing sub-model '{name}'");
                Some(std::mem::replace(&mut self.models[index].1, model))
            }
            None => {
                debug!("Adding sub-model '{name}'");
                self.models.push((name, model));
                None
            }
        }
    }

    pub fn model(&self, name: &str) -> Option<&(dyn Model + 'a)> {
        self.position(name).map(|index| self.models[index].1.as_ref())
    }

    pub fn model_mut(&mut self, name: &str) -> Option<&mut (dyn Model + 'a)> {
        let index = self.position(name)?;
        Some(self.models[index].1.as_mut())
    }

    /// Registered sub-model names in insertion order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|(name, _)| name.as_str())
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Releases the sub-model borrows and returns the local model.
    pub fn into_base(self) -> B {
        self.base
    }

    /// Reads `name`, from a sub-model when it addresses one.
    ///
    /// Sub-model failures propagate unchanged. Local lookups use the full
    /// original name and fail with [`ModelError::UndefinedAttribute`].
    pub fn get(&self, name: &str) -> Result<AttributeValue, ModelError> {
        match self.delegate(name) {
            Some((index, attribute)) => self.models[index].1.get_attribute(attribute),
            None => self.base.get_attribute(name),
        }
    }

    /// Writes `name`, routed the same way as [`ModelGroupForm::get`].
    pub fn set(&mut self, name: &str, value: AttributeValue) -> Result<(), ModelError> {
        match self.delegate(name) {
            Some((index, attribute)) => self.models[index].1.set_attribute(attribute, value),
            None => self.base.set_attribute(name, value),
        }
    }

    /// Mass assignment across the local model and sub-models.
    ///
    /// The local model receives the whole map first, filtered by its own
    /// safety policy when `safe_only` is set. Then every entry addressing a
    /// registered sub-model is written to it. Under
    /// [`DelegatedWritePolicy::Unfiltered`] those delegated writes ignore
    /// `safe_only`; under [`DelegatedWritePolicy::SafeOnly`] they must target
    /// one of the sub-model's safe attributes.
    pub fn set_many(&mut self, values: &AttributeValues, safe_only: bool) -> Result<(), ModelError> {
        self.base.set_attributes(values, safe_only)?;

        let filter_delegated =
            safe_only && self.config.delegated_writes == DelegatedWritePolicy::SafeOnly;

        for (name, value) in values {
            let Some((index, attribute)) = self.delegate(name) else {
                continue;
            };
            let (model_name, model) = &mut self.models[index];

            if filter_delegated
                && !model
                    .safe_attribute_names()
                    .iter()
                    .any(|safe| safe == attribute)
            {
                warn!("Skipping unsafe attribute '{attribute}' of sub-model '{model_name}'");
                continue;
            }

            model.set_attribute(attribute, value.clone())?;
        }

        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.models.iter().position(|(existing, _)| existing == name)
    }

    /// Index of the addressed sub-model and the attribute to ask it for.
    fn delegate<'n>(&self, name: &'n str) -> Option<(usize, &'n str)> {
        match AttributePath::resolve(name) {
            AttributePath::Nested { model, attribute } => match self.position(model) {
                Some(index) => Some((index, attribute)),
                None => {
                    debug!("No sub-model '{model}' for '{name}', using local attribute");
                    None
                }
            },
            AttributePath::Local(_) => None,
        }
    }
}

impl<B: Model> Model for ModelGroupForm<'_, B> {
    /// Local names followed by `model.attribute` for every sub-model attribute.
    fn attribute_names(&self) -> Vec<String> {
        let mut names = self.base.attribute_names();
        for (model_name, model) in &self.models {
            names.extend(
                model
                    .attribute_names()
                    .into_iter()
                    .map(|attribute| format!("{model_name}.{attribute}")),
            );
        }
        names
    }

    /// Local safe names followed by `model.attribute` for every safe sub-model attribute.
    ///
    /// An enclosing group filtering delegated writes checks dotted names
    /// against this list, so safety holds through every nesting level.
    fn safe_attribute_names(&self) -> Vec<String> {
        let mut names = self.base.safe_attribute_names();
        for (model_name, model) in &self.models {
            names.extend(
                model
                    .safe_attribute_names()
                    .into_iter()
                    .map(|attribute| format!("{model_name}.{attribute}")),
            );
        }
        names
    }

    fn get_attribute(&self, name: &str) -> Result<AttributeValue, ModelError> {
        self.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), ModelError> {
        self.set(name, value)
    }

    fn set_attributes(
        &mut self,
        values: &AttributeValues,
        safe_only: bool,
    ) -> Result<(), ModelError> {
        self.set_many(values, safe_only)
    }

    /// Validates the local model with `attributes`, then every sub-model in full.
    ///
    /// Every sub-model runs even after a failure; the result is true only if
    /// all of them and the local model are valid.
    fn validate(&mut self, attributes: Option<&[&str]>, clear_errors: bool) -> bool {
        let mut valid = self.base.validate(attributes, clear_errors);

        for (model_name, model) in &mut self.models {
            let model_valid = model.validate(None, clear_errors);
            debug!("Sub-model '{model_name}' validated: valid={model_valid}");
            valid = model_valid && valid;
        }

        valid
    }

    /// A dotted name consults only that sub-model; anything else only the local model.
    fn has_errors(&self, attribute: Option<&str>) -> bool {
        match attribute.and_then(|name| self.delegate(name)) {
            Some((index, sub_attribute)) => self.models[index].1.has_errors(Some(sub_attribute)),
            None => self.base.has_errors(attribute),
        }
    }

    /// Local messages, then each sub-model's messages for the same literal argument.
    fn get_errors(&self, attribute: Option<&str>) -> Vec<String> {
        let mut errors = self.base.get_errors(attribute);
        for (_, model) in &self.models {
            errors.extend(model.get_errors(attribute));
        }
        errors
    }

    fn get_error(&self, attribute: &str) -> Option<String> {
        match self.delegate(attribute) {
            Some((index, sub_attribute)) => self.models[index].1.get_error(sub_attribute),
            None => self.base.get_error(attribute),
        }
    }

    /// Local entries, then sub-model entries keyed `model.attribute`.
    fn errors_by_attribute(&self) -> Vec<(String, Vec<String>)> {
        let mut entries = self.base.errors_by_attribute();
        for (model_name, model) in &self.models {
            entries.extend(
                model
                    .errors_by_attribute()
                    .into_iter()
                    .map(|(attribute, messages)| (format!("{model_name}.{attribute}"), messages)),
            );
        }
        entries
    }

    fn get_attribute_label(&self, attribute: &str) -> String {
        match self.delegate(attribute) {
            Some((index, sub_attribute)) => self.models[index].1.get_attribute_label(sub_attribute),
            None => self.base.get_attribute_label(attribute),
        }
    }
}
