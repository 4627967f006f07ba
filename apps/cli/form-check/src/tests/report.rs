use crate::report::{FieldErrors, Report};

use form_model::{AttributeBuilder, FormModel, Model};
use model_group::ModelGroupForm;

/// **VALUE**: Verifies report entries use dotted keys with labels resolved through the group.
///
/// **WHY THIS MATTERS**: The report is what a front end renders next to each input.
///
/// **BUG THIS CATCHES**: Would catch labels being looked up without path resolution
/// (`Address Zip` instead of `Postal code`).
#[test]
fn given_invalid_group_when_building_report_then_entries_are_labelled() {
    // GIVEN: An empty signup form with an address sub-model
    let form = FormModel::builder("signup")
        .with_attribute(AttributeBuilder::new("email").required())
        .build()
        .unwrap();
    let address = FormModel::builder("address")
        .with_attribute(AttributeBuilder::new("zip").with_label("Postal code").required())
        .build()
        .unwrap();
    let mut group = ModelGroupForm::new(form).with_model("address", address);
    let valid = group.validate(None, true);

    // WHEN: Building the report
    let report = Report::from_model(valid, &group);

    // THEN: Both fields appear in order with their labels
    assert_eq!(report.exit_code(), 1);
    assert_eq!(
        report.errors,
        vec![
            FieldErrors {
                attribute: String::from("email"),
                label: String::from("Email"),
                messages: vec![String::from("Email cannot be blank.")],
            },
            FieldErrors {
                attribute: String::from("address.zip"),
                label: String::from("Postal code"),
                messages: vec![String::from("Postal code cannot be blank.")],
            },
        ]
    );
}

/// **VALUE**: Verifies the JSON shape consumers parse.
#[test]
fn given_valid_report_when_serialized_then_has_valid_flag_and_empty_errors() {
    let report = Report {
        valid: true,
        errors: Vec::new(),
    };

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json, serde_json::json!({"valid": true, "errors": []}));
    assert_eq!(report.exit_code(), 0);
}
