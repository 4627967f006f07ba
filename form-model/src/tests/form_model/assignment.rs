use crate::{AttributeBuilder, AttributeValues, FormModel, Model};

use serde_json::json;

fn profile() -> FormModel {
    FormModel::builder("profile")
        .with_attribute(AttributeBuilder::new("name").required())
        .with_attribute(AttributeBuilder::new("role").with_value("member"))
        .build()
        .unwrap()
}

fn values(pairs: serde_json::Value) -> AttributeValues {
    pairs.as_object().cloned().unwrap_or_default()
}

/// **VALUE**: Verifies safe-only mass assignment skips attributes outside the safe list.
///
/// **WHY THIS MATTERS**: This is the mass-assignment guard: a posted `role` must not
/// escalate privileges when `role` has no checks.
///
/// **BUG THIS CATCHES**: Would catch the default `set_attributes` ignoring `safe_only`.
#[test]
fn given_unsafe_field_when_assigning_safe_only_then_field_is_untouched() {
    // GIVEN: A profile with an unchecked `role`
    let mut model = profile();

    // WHEN: Mass-assigning name and role with safe_only
    model
        .set_attributes(
            &values(json!({"name": "Kari", "role": "admin", "ghost": 1})),
            true,
        )
        .unwrap();

    // THEN: Only the safe attribute changed
    assert_eq!(model.get_attribute("name").unwrap(), json!("Kari"));
    assert_eq!(model.get_attribute("role").unwrap(), json!("member"));
}

/// **VALUE**: Verifies unfiltered assignment reaches every declared attribute and
/// still ignores undeclared names.
#[test]
fn given_unfiltered_assignment_when_assigning_then_declared_fields_change() {
    let mut model = profile();

    let result = model.set_attributes(
        &values(json!({"name": "Kari", "role": "admin", "ghost": 1})),
        false,
    );

    assert!(result.is_ok(), "Undeclared names should be skipped");
    assert_eq!(model.get_attribute("role").unwrap(), json!("admin"));
    assert!(!model.has_attribute("ghost"));
}

/// **VALUE**: Verifies `&mut FormModel` forwards through the `Model` blanket impl.
///
/// **WHY THIS MATTERS**: Groups borrow sub-models as `&mut M`; writes must land in the
/// caller's model, not a copy.
///
/// **BUG THIS CATCHES**: Would catch the blanket impl dropping an override.
#[test]
fn given_mutable_borrow_when_used_as_model_then_writes_reach_owner() {
    let mut model = profile();

    {
        let mut borrowed: &mut FormModel = &mut model;
        Model::set_attribute(&mut borrowed, "name", json!("Ola")).unwrap();
        assert!(Model::validate(&mut borrowed, None, true));
    }

    assert_eq!(model.get_attribute("name").unwrap(), json!("Ola"));
}
