//! One request cycle: load, bind, validate, report.

use crate::args::CliArgs;
use crate::definition::FormDefinition;
use crate::error::FormCheckError;
use crate::report::Report;

use form_model::{AttributeValues, Model};

use std::path::Path;

use log::{debug, info};

/// Read the posted values: a JSON object whose keys may be dotted.
pub fn load_input(path: &Path) -> Result<AttributeValues, FormCheckError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| FormCheckError::input(path, e.to_string()))?;

    match serde_json::from_str(&contents) {
        Ok(serde_json::Value::Object(values)) => Ok(values),
        Ok(other) => Err(FormCheckError::input(
            path,
            format!("expected a JSON object, got {other}"),
        )),
        Err(e) => Err(FormCheckError::input(path, e.to_string())),
    }
}

/// Binds `values` into a group built from `definition` and validates it.
pub fn check_values(
    definition: &FormDefinition,
    values: &AttributeValues,
    all: bool,
) -> Result<Report, FormCheckError> {
    let mut group = definition.build_group()?;
    let safe_only = !all && group.config().safe_only;

    debug!("Assigning {} value(s), safe_only={safe_only}", values.len());
    group.set_many(values, safe_only)?;

    let valid = group.validate(None, true);
    info!("Form '{}' valid={valid}", definition.form.name);

    Ok(Report::from_model(valid, &group))
}

pub fn run(args: &CliArgs) -> Result<Report, FormCheckError> {
    let definition = FormDefinition::load(&args.definition)?;
    let values = load_input(&args.input)?;
    check_values(&definition, &values, args.all)
}
