use crate::helpers::{address, signup_form, values};

use form_model::Model;
use model_group::{DelegatedWritePolicy, GroupConfig, ModelError, ModelGroupForm};

use serde_json::json;

/// **VALUE**: Verifies delegated writes bypass the local safe list by default.
///
/// **WHY THIS MATTERS**: `addr.city` is never in the local model's safe list, yet posted
/// sub-model fields must still be bound. This asymmetry is long-standing behavior that
/// existing forms depend on.
///
/// **BUG THIS CATCHES**: Would catch `set_many` applying the local safe filter to dotted names.
#[test]
fn given_dotted_field_not_in_local_safe_list_when_set_many_safe_only_then_sub_model_is_written() {
    // GIVEN: A default-config group
    let mut addr = address();

    {
        let mut group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);

        // WHEN: Mass-assigning a dotted name with safe_only
        group
            .set_many(&values(json!({"addr.city": "X"})), true)
            .unwrap();
    }

    // THEN: The sub-model received the value
    assert_eq!(addr.get_attribute("city").unwrap(), json!("X"));
}

/// **VALUE**: Verifies delegated writes ignore the sub-model's own safe list too (parity mode).
///
/// **WHY THIS MATTERS**: Documents the surprising half of the asymmetry: an unchecked
/// sub-model attribute is still writable from request input.
///
/// **BUG THIS CATCHES**: Would catch the default policy silently changing to filtered.
#[test]
fn given_unsafe_sub_attribute_when_set_many_unfiltered_policy_then_it_is_written() {
    let mut addr = address();

    {
        let mut group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);
        group
            .set_many(&values(json!({"addr.internal_code": "A1"})), true)
            .unwrap();
    }

    assert_eq!(addr.get_attribute("internal_code").unwrap(), json!("A1"));
}

/// **VALUE**: Verifies local writes still respect the local safe list.
///
/// **BUG THIS CATCHES**: Would catch the local pass running with `safe_only = false`.
#[test]
fn given_unsafe_local_field_when_set_many_safe_only_then_local_field_is_untouched() {
    let mut group = ModelGroupForm::new(signup_form()).with_model("addr", address());

    group
        .set_many(
            &values(json!({"email": "kari@example.no", "role": "admin"})),
            true,
        )
        .unwrap();

    assert_eq!(group.get("email").unwrap(), json!("kari@example.no"));
    assert_eq!(group.get("role").unwrap(), json!("member"));

    group
        .set_many(&values(json!({"role": "admin"})), false)
        .unwrap();
    assert_eq!(group.get("role").unwrap(), json!("admin"));
}

/// **VALUE**: Verifies the opt-in `SafeOnly` policy filters delegated writes through the
/// sub-model's safe list.
///
/// **WHY THIS MATTERS**: Lets a deployment close the mass-assignment gap without touching
/// every form.
///
/// **BUG THIS CATCHES**: Would catch the policy being read but never applied, or applied
/// even when the caller passed `safe_only = false`.
#[test]
fn given_safe_only_policy_when_set_many_then_unsafe_sub_attributes_are_skipped() {
    let mut addr = address();
    let config = GroupConfig {
        delegated_writes: DelegatedWritePolicy::SafeOnly,
        ..GroupConfig::default()
    };

    {
        let mut group = ModelGroupForm::new(signup_form())
            .with_config(config)
            .with_model("addr", &mut addr);

        group
            .set_many(
                &values(json!({"addr.city": "Oslo", "addr.internal_code": "A1"})),
                true,
            )
            .unwrap();

        group
            .set_many(&values(json!({"addr.zip": "0150"})), false)
            .unwrap();
    }

    assert_eq!(addr.get_attribute("city").unwrap(), json!("Oslo"));
    assert_eq!(addr.get_attribute("internal_code").unwrap(), json!(null));
    assert_eq!(addr.get_attribute("zip").unwrap(), json!("0150"));
}

/// **VALUE**: Verifies a delegated write to an undeclared sub-attribute fails, while unknown
/// model prefixes are ignored.
///
/// **WHY THIS MATTERS**: Binding `addr.country` to a model without `country` is a programming
/// error and must not vanish; `ghost.city` is just an unrecognized field.
///
/// **BUG THIS CATCHES**: Would catch delegated write errors being swallowed.
#[test]
fn given_undeclared_sub_attribute_when_set_many_then_returns_undefined_attribute() {
    let mut group = ModelGroupForm::new(signup_form()).with_model("addr", address());

    let ignored = group.set_many(&values(json!({"ghost.city": "Oslo"})), true);
    assert!(ignored.is_ok());

    let err = group
        .set_many(&values(json!({"addr.country": "NO"})), true)
        .unwrap_err();
    assert!(matches!(err, ModelError::UndefinedAttribute { .. }));
    assert_eq!(err.attribute(), Some("country"));
}

/// **VALUE**: Verifies the local model keeps its bound values and errors after the group is
/// consumed.
///
/// **BUG THIS CATCHES**: Would catch `into_base` handing back a fresh or stale model.
#[test]
fn given_bound_and_validated_group_when_into_base_then_local_state_survives() {
    let mut addr = address();
    let group_valid;
    let base = {
        let mut group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);
        group
            .set_many(&values(json!({"email": "", "addr.city": "Oslo"})), true)
            .unwrap();
        group_valid = group.validate(None, true);
        group.into_base()
    };

    assert!(!group_valid);
    assert_eq!(base.get_attribute("email").unwrap(), json!(""));
    assert!(base.errors().has(Some("email")));
    assert_eq!(addr.get_attribute("city").unwrap(), json!("Oslo"));
}
