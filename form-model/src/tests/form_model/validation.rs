use crate::{AttributeBuilder, FormModel, Model, ModelError};

use serde_json::json;

fn address() -> FormModel {
    FormModel::builder("address")
        .with_attribute(AttributeBuilder::new("city").required())
        .with_attribute(
            AttributeBuilder::new("zip")
                .with_label("Postal code")
                .required()
                .pattern(r"^\d{4}$"),
        )
        .with_attribute(AttributeBuilder::new("note").safe())
        .build()
        .unwrap()
}

/// **VALUE**: Verifies full validation records every failing check with labels.
///
/// **WHY THIS MATTERS**: The group reads these messages verbatim; the label in each message
/// is what end users see.
///
/// **BUG THIS CATCHES**: Would catch checks stopping at the first failure or labels not
/// being substituted.
#[test]
fn given_blank_model_when_validating_then_reports_each_failing_attribute() {
    // GIVEN: An address with nothing filled in
    let mut model = address();

    // WHEN: Validating everything
    let valid = model.validate(None, true);

    // THEN: Both required attributes fail, note has no checks
    assert!(!valid);
    assert_eq!(
        model.get_errors(None),
        vec!["City cannot be blank.", "Postal code cannot be blank."]
    );
    assert_eq!(
        model.get_error("zip").as_deref(),
        Some("Postal code cannot be blank.")
    );
    assert!(!model.has_errors(Some("note")));
}

/// **VALUE**: Verifies the attribute subset limits which checks run.
#[test]
fn given_attribute_subset_when_validating_then_only_those_attributes_are_checked() {
    let mut model = address();

    let valid = model.validate(Some(&["city"]), true);

    assert!(!valid);
    assert!(model.has_errors(Some("city")));
    assert!(!model.has_errors(Some("zip")));
}

/// **VALUE**: Verifies `clear_errors = false` keeps old messages and keeps the model invalid.
///
/// **WHY THIS MATTERS**: Callers may add errors manually before validating; dropping them
/// would report a model as valid while showing messages.
///
/// **BUG THIS CATCHES**: Would catch validate() computing its result only from new failures.
#[test]
fn given_existing_errors_when_validating_without_clearing_then_stays_invalid() {
    // GIVEN: A fully valid address with a manual error
    let mut model = address();
    model.set_attribute("city", json!("Oslo")).unwrap();
    model.set_attribute("zip", json!("0150")).unwrap();
    model.add_error("city", "City is not served.");

    // WHEN: Validating without clearing
    let kept = model.validate(None, false);

    // THEN: Old message survives and result is false
    assert!(!kept);
    assert_eq!(model.get_errors(Some("city")), vec!["City is not served."]);

    // WHEN: Validating with clearing
    let cleared = model.validate(None, true);

    // THEN: Model is valid again
    assert!(cleared);
    assert!(!model.has_errors(None));
}

/// **VALUE**: Verifies labels prefer explicit text and humanize everything else.
#[test]
fn given_declared_and_unknown_attributes_when_getting_labels_then_falls_back_to_humanized() {
    let model = address();

    assert_eq!(model.get_attribute_label("zip"), "Postal code");
    assert_eq!(model.get_attribute_label("city"), "City");
    assert_eq!(model.get_attribute_label("streetName"), "Street Name");
}

/// **VALUE**: Verifies undeclared reads and writes fail as undefined attributes.
///
/// **WHY THIS MATTERS**: This is the error a group propagates unchanged from sub-models.
///
/// **BUG THIS CATCHES**: Would catch unknown names silently returning null.
#[test]
fn given_undeclared_attribute_when_accessing_then_returns_undefined_attribute_error() {
    let mut model = address();

    let read = model.get_attribute("country").unwrap_err();
    match &read {
        ModelError::UndefinedAttribute {
            model, attribute, ..
        } => {
            assert_eq!(model, "address");
            assert_eq!(attribute, "country");
        }
        other => panic!("Expected UndefinedAttribute, got {other:?}"),
    }
    assert!(read.to_string().contains("address.country is not defined"));

    let write = model.set_attribute("country", json!("NO")).unwrap_err();
    assert!(matches!(write, ModelError::UndefinedAttribute { .. }));
}

/// **VALUE**: Verifies errors grouped by attribute keep their messages together.
#[test]
fn given_failures_when_listing_by_attribute_then_groups_messages() {
    let mut model = address();
    model.set_attribute("zip", json!("12")).unwrap();

    model.validate(None, true);

    assert_eq!(
        model.errors_by_attribute(),
        vec![
            (
                String::from("city"),
                vec![String::from("City cannot be blank.")]
            ),
            (
                String::from("zip"),
                vec![String::from("Postal code is invalid.")]
            ),
        ]
    );
}
