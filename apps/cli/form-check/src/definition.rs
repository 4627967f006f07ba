//! TOML form definitions: the local form, its sub-models and group settings.
//!
//! ```toml
//! [group]
//! delegated_writes = "safe_only"
//!
//! [form]
//! name = "signup"
//! [[form.attributes]]
//! name = "email"
//! rules = [{ kind = "required" }]
//!
//! [[models]]
//! name = "address"
//! [[models.attributes]]
//! name = "zip"
//! label = "Postal code"
//! rules = [{ kind = "pattern", pattern = '^\d{4}$' }]
//! ```

use crate::error::FormCheckError;

use form_model::{AttributeBuilder, AttributeValue, FormModel, ModelError};
use model_group::{GroupConfig, ModelGroupForm};

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleDefinition {
    Required,
    Length {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    Pattern {
        pattern: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDefinition {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Overrides the default "safe when it has rules".
    #[serde(default)]
    pub safe: Option<bool>,
    #[serde(default)]
    pub default: Option<AttributeValue>,
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelDefinition {
    /// Model name; sub-models are also addressed by it (`name.attribute`).
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<AttributeDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub group: GroupConfig,
    pub form: ModelDefinition,
    #[serde(default)]
    pub models: Vec<ModelDefinition>,
}

impl AttributeDefinition {
    fn to_builder(&self) -> AttributeBuilder {
        let mut builder = AttributeBuilder::new(&self.name);

        if let Some(label) = &self.label {
            builder = builder.with_label(label);
        }
        if let Some(value) = &self.default {
            builder = builder.with_value(value.clone());
        }

        for rule in &self.rules {
            builder = match rule {
                RuleDefinition::Required => builder.required(),
                RuleDefinition::Length { min, max } => builder.length(*min, *max),
                RuleDefinition::Pattern { pattern } => builder.pattern(pattern),
            };
        }

        match self.safe {
            Some(true) => builder.safe(),
            Some(false) => builder.unsafe_(),
            None => builder,
        }
    }
}

impl ModelDefinition {
    pub fn build(&self) -> Result<FormModel, ModelError> {
        self.attributes
            .iter()
            .fold(FormModel::builder(&self.name), |builder, attribute| {
                builder.with_attribute(attribute.to_builder())
            })
            .build()
    }
}

impl FormDefinition {
    /// Load a definition file.
    pub fn load(path: &Path) -> Result<Self, FormCheckError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FormCheckError::definition(path, e.to_string()))?;

        let definition = Self::parse(&contents)
            .map_err(|reason| FormCheckError::definition(path, reason))?;

        info!(
            "Loaded form '{}' with {} sub-model(s) from {}",
            definition.form.name,
            definition.models.len(),
            path.display()
        );
        Ok(definition)
    }

    /// Parse TOML text, returning the parser's message on failure.
    pub fn parse(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Build the group: the local form plus every sub-model, in file order.
    pub fn build_group(&self) -> Result<ModelGroupForm<'static>, FormCheckError> {
        self.group.validate()?;

        let mut group = ModelGroupForm::new(self.form.build()?).with_config(self.group.clone());

        for model in &self.models {
            debug!("Registering sub-model '{}'", model.name);
            if group.add_model(&model.name, model.build()?).is_some() {
                return Err(ModelError::validation(format!(
                    "Sub-model '{}' is defined more than once",
                    model.name
                ))
                .into());
            }
        }

        Ok(group)
    }
}
