use crate::helpers::{address, signup_form, values};

use form_model::{AttributeBuilder, FormModel, Model};
use model_group::{DelegatedWritePolicy, GroupConfig, ModelGroupForm};

use serde_json::json;

fn shipping_form() -> FormModel {
    FormModel::builder("shipping")
        .with_attribute(AttributeBuilder::new("carrier").required())
        .build()
        .expect("shipping fixture should build")
}

/// **VALUE**: Verifies a group can be a sub-model of another group and paths resolve twice.
///
/// **WHY THIS MATTERS**: Checkout-style forms nest a shipping group (with its own address)
/// inside the order form. `shipping.addr.city` must reach the innermost model.
///
/// **BUG THIS CATCHES**: Would catch the path split consuming more than the first segment.
#[test]
fn given_nested_group_when_accessing_three_part_name_then_reaches_innermost_model() {
    // GIVEN: order -> shipping group -> addr
    let mut addr = address();
    let mut shipping = ModelGroupForm::new(shipping_form()).with_model("addr", &mut addr);

    {
        let mut order = ModelGroupForm::new(signup_form()).with_model("shipping", &mut shipping);

        // WHEN: Binding and reading through both levels
        order
            .set_many(
                &values(json!({
                    "shipping.carrier": "Posten",
                    "shipping.addr.city": "Oslo",
                })),
                true,
            )
            .unwrap();

        // THEN: Reads resolve through both groups
        assert_eq!(order.get("shipping.addr.city").unwrap(), json!("Oslo"));
        assert_eq!(order.get("shipping.carrier").unwrap(), json!("Posten"));
        assert_eq!(order.get_attribute_label("shipping.addr.zip"), "Postal code");

        // AND: Validation reaches the innermost model
        assert!(!order.validate(None, true));
        assert!(order.has_errors(Some("shipping.addr.zip")));
        assert!(!order.has_errors(Some("shipping.addr.city")));
    }

    drop(shipping);
    assert_eq!(addr.get_attribute("city").unwrap(), json!("Oslo"));
}

/// **VALUE**: Verifies grouped errors from a nested group carry the full dotted key.
#[test]
fn given_nested_group_when_grouping_errors_then_keys_include_every_level() {
    let shipping = ModelGroupForm::new(shipping_form()).with_model("addr", address());
    let mut order = ModelGroupForm::new(signup_form()).with_model("shipping", shipping);

    order.validate(None, true);

    let keys: Vec<String> = order
        .errors_by_attribute()
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    assert_eq!(
        keys,
        vec![
            "email",
            "shipping.carrier",
            "shipping.addr.city",
            "shipping.addr.zip"
        ]
    );
}

/// **VALUE**: Verifies the safe-only delegated write policy still reaches safe attributes
/// of a group nested inside a group, and still blocks unsafe ones.
///
/// **WHY THIS MATTERS**: The outer group checks `shipping.addr.city` against the nested
/// group's safe list. If that list held only the nested group's local names, every
/// innermost write would be skipped.
///
/// **BUG THIS CATCHES**: Would catch a group's safe list omitting its sub-models' dotted names.
#[test]
fn given_nested_group_and_safe_only_policy_when_set_many_then_safe_innermost_fields_are_written()
{
    // GIVEN: order (safe_only policy) -> shipping group -> addr
    let mut addr = address();
    let mut shipping = ModelGroupForm::new(shipping_form()).with_model("addr", &mut addr);
    let config = GroupConfig {
        delegated_writes: DelegatedWritePolicy::SafeOnly,
        ..GroupConfig::default()
    };

    {
        let mut order = ModelGroupForm::new(signup_form())
            .with_config(config)
            .with_model("shipping", &mut shipping);

        // WHEN: Mass-assigning safe and unsafe innermost fields with safe_only
        order
            .set_many(
                &values(json!({
                    "shipping.carrier": "Posten",
                    "shipping.addr.city": "Oslo",
                    "shipping.addr.internal_code": "X-1",
                })),
                true,
            )
            .unwrap();

        // THEN: Safe fields at both levels are bound
        assert_eq!(order.get("shipping.carrier").unwrap(), json!("Posten"));
        assert_eq!(order.get("shipping.addr.city").unwrap(), json!("Oslo"));
    }

    // AND: The unsafe innermost field was skipped
    drop(shipping);
    assert_eq!(addr.get_attribute("internal_code").unwrap(), json!(null));
}
