use crate::helpers::{address, signup_form};

use form_model::Model;
use model_group::{ModelError, ModelGroupForm};

use serde_json::json;

/// **VALUE**: Verifies dotted reads reach the sub-model and bare reads stay local.
///
/// **WHY THIS MATTERS**: Templates render `addr.city` straight from the group; if the read
/// went to the local model it would always fail.
///
/// **BUG THIS CATCHES**: Would catch routing on the wrong half of the split.
#[test]
fn given_registered_sub_model_when_getting_dotted_name_then_returns_sub_model_value() {
    // GIVEN: A group with an address whose city is set
    let mut addr = address();
    addr.set_attribute("city", json!("Bergen")).unwrap();
    let group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);

    // WHEN/THEN: Dotted read goes to the sub-model, bare read stays local
    assert_eq!(group.get("addr.city").unwrap(), json!("Bergen"));
    assert_eq!(group.get("role").unwrap(), json!("member"));
}

/// **VALUE**: Verifies an unknown model prefix falls back to a local lookup of the full name.
///
/// **WHY THIS MATTERS**: Unknown prefixes are not a routing error; they are treated as a
/// local attribute literally named `unknown.city`, which then fails as undefined.
///
/// **BUG THIS CATCHES**: Would catch the fallback passing only `city` to the local model.
#[test]
fn given_unknown_model_prefix_when_getting_then_fails_as_undefined_local_attribute() {
    let mut addr = address();
    let group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);

    let err = group.get("unknown.city").unwrap_err();

    match err {
        ModelError::UndefinedAttribute {
            model, attribute, ..
        } => {
            assert_eq!(model, "signup");
            assert_eq!(attribute, "unknown.city");
        }
        other => panic!("Expected UndefinedAttribute, got {other:?}"),
    }
}

/// **VALUE**: Verifies a sub-model's own undefined-attribute failure propagates unchanged.
#[test]
fn given_undefined_sub_attribute_when_getting_then_sub_model_error_propagates() {
    let mut addr = address();
    let group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);

    let err = group.get("addr.country").unwrap_err();

    match err {
        ModelError::UndefinedAttribute {
            model, attribute, ..
        } => {
            assert_eq!(model, "address");
            assert_eq!(attribute, "country");
        }
        other => panic!("Expected UndefinedAttribute, got {other:?}"),
    }
}

/// **VALUE**: Verifies explicit `set` routes like `get` and the write lands in the caller's model.
///
/// **WHY THIS MATTERS**: Sub-models are borrowed for the cycle; after the group is dropped
/// the caller reads its own model.
///
/// **BUG THIS CATCHES**: Would catch the group cloning sub-models instead of borrowing them.
#[test]
fn given_borrowed_sub_model_when_setting_dotted_name_then_owner_sees_value() {
    let mut addr = address();

    {
        let mut group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);
        group.set("addr.city", json!("Tromsø")).unwrap();
        group.set("email", json!("kari@example.no")).unwrap();
        assert_eq!(group.base().get_attribute("email").unwrap(), json!("kari@example.no"));
        assert!(group.set("addr.country", json!("NO")).is_err());
    }

    assert_eq!(addr.get_attribute("city").unwrap(), json!("Tromsø"));
}

/// **VALUE**: Verifies labels come from the addressed sub-model and fall back locally.
///
/// **WHY THIS MATTERS**: Form renderers label each input via the group.
///
/// **BUG THIS CATCHES**: Would catch the sub-model label being looked up with the dotted name.
#[test]
fn given_dotted_and_local_names_when_getting_labels_then_each_source_answers() {
    let mut addr = address();
    let group = ModelGroupForm::new(signup_form()).with_model("addr", &mut addr);

    assert_eq!(group.get_attribute_label("addr.zip"), "Postal code");
    assert_eq!(group.get_attribute_label("email"), "Email");
    assert_eq!(group.get_attribute_label("other.zip"), "Other Zip");
}

/// **VALUE**: Verifies registration order, lookup and in-place replacement.
///
/// **WHY THIS MATTERS**: Replacement must keep the original slot so error order stays stable.
///
/// **BUG THIS CATCHES**: Would catch replacement appending a second entry.
#[test]
fn given_existing_name_when_adding_model_then_replaces_in_place() {
    let mut group = ModelGroupForm::new(signup_form())
        .with_model("billing", address())
        .with_model("shipping", address());

    let previous = group.add_model("billing", address());

    assert!(previous.is_some(), "Replaced model should be returned");
    assert_eq!(group.model_names().collect::<Vec<_>>(), vec!["billing", "shipping"]);
    assert!(group.model("shipping").is_some());
    assert!(group.model("missing").is_none());

    group
        .model_mut("shipping")
        .unwrap()
        .set_attribute("city", json!("Oslo"))
        .unwrap();
    assert_eq!(group.get("shipping.city").unwrap(), json!("Oslo"));
}

/// **VALUE**: Verifies the group lists local names then dotted sub-model names.
#[test]
fn given_group_when_listing_attribute_names_then_includes_dotted_sub_model_names() {
    let group = ModelGroupForm::new(signup_form()).with_model("addr", address());

    assert_eq!(
        group.attribute_names(),
        vec![
            "email",
            "role",
            "addr.city",
            "addr.zip",
            "addr.internal_code"
        ]
    );
    assert_eq!(
        group.safe_attribute_names(),
        vec!["email", "addr.city", "addr.zip"]
    );
}
