use crate::helpers::{RecordingModel, address, signup_form};

use form_model::{FormModel, Model};
use model_group::ModelGroupForm;

use serde_json::json;

fn form_with_local_error() -> FormModel {
    let mut form = signup_form();
    form.add_error("email", "L1");
    form
}

/// **VALUE**: Verifies `get_errors(None)` lists local messages first, then sub-models in
/// registration order.
///
/// **WHY THIS MATTERS**: Error summaries render top to bottom in this order; reordering
/// would shuffle the page on every request.
///
/// **BUG THIS CATCHES**: Would catch sub-model messages being prepended or sorted.
#[test]
fn given_local_and_sub_model_errors_when_getting_all_errors_then_local_comes_first() {
    // GIVEN: Local error L1 and two recording sub-models
    let mut first = RecordingModel::valid().with_error("city", "S1");
    let mut second = RecordingModel::valid().with_error("zip", "S2");
    let group = ModelGroupForm::new(form_with_local_error())
        .with_model("first", &mut first)
        .with_model("second", &mut second);

    // WHEN: Listing every error
    let errors = group.get_errors(None);

    // THEN: Local first, then sub-models in insertion order
    assert_eq!(errors, vec!["L1", "S1", "S2"]);
}

/// **VALUE**: Verifies a bare name asks every sub-model for that same literal name.
///
/// **WHY THIS MATTERS**: `get_errors("city")` is not dotted, so sub-models only contribute
/// when they have their own `city` attribute in error.
///
/// **BUG THIS CATCHES**: Would catch `get_errors` resolving paths like `get_error` does.
#[test]
fn given_bare_attribute_when_getting_errors_then_only_literal_matches_are_collected() {
    let mut with_city = RecordingModel::valid().with_error("city", "S-city");
    let mut with_zip = RecordingModel::valid().with_error("zip", "S-zip");
    let group = ModelGroupForm::new(form_with_local_error())
        .with_model("a", &mut with_city)
        .with_model("b", &mut with_zip);

    assert_eq!(group.get_errors(Some("city")), vec!["S-city"]);
    assert_eq!(group.get_errors(Some("email")), vec!["L1"]);
    assert!(group.get_errors(Some("a.city")).is_empty());
}

/// **VALUE**: Verifies duplicate messages are kept.
#[test]
fn given_same_message_in_two_models_when_getting_errors_then_duplicates_are_kept() {
    let mut first = RecordingModel::valid().with_error("x", "same");
    let mut second = RecordingModel::valid().with_error("x", "same");
    let group = ModelGroupForm::new(signup_form())
        .with_model("first", &mut first)
        .with_model("second", &mut second);

    assert_eq!(group.get_errors(Some("x")), vec!["same", "same"]);
}

/// **VALUE**: Verifies `has_errors` looks at exactly one source.
///
/// **WHY THIS MATTERS**: A dotted name answers for that sub-model only; `None` or a bare name
/// answers for the local model only. There is deliberately no "anything anywhere" flag.
///
/// **BUG THIS CATCHES**: Would catch `has_errors(None)` aggregating sub-model errors.
#[test]
fn given_errors_in_one_sub_model_when_checking_has_errors_then_sources_are_isolated() {
    // GIVEN: Clean local model, invalid address
    let mut form = signup_form();
    form.set_attribute("email", json!("kari@example.no")).unwrap();
    let mut group = ModelGroupForm::new(form)
        .with_model("addr", address())
        .with_model("billing", address());
    group.set("billing.city", json!("Oslo")).unwrap();
    group.set("billing.zip", json!("0150")).unwrap();
    group.validate(None, true);

    // THEN: Only the addressed sub-model answers
    assert!(group.has_errors(Some("addr.city")));
    assert!(!group.has_errors(Some("billing.city")));
    assert!(!group.has_errors(None), "None checks local errors only");
    assert!(!group.has_errors(Some("city")), "Bare name checks local only");

    // AND: Local errors do not leak into dotted lookups
    group.base_mut().add_error("email", "Taken.");
    assert!(group.has_errors(None));
    assert!(!group.has_errors(Some("billing.zip")));
}

/// **VALUE**: Verifies `get_error` picks exactly one source by path.
#[test]
fn given_dotted_and_bare_names_when_getting_first_error_then_single_source_answers() {
    let mut group = ModelGroupForm::new(form_with_local_error()).with_model("addr", address());
    group.validate(None, false);

    assert_eq!(
        group.get_error("addr.zip").as_deref(),
        Some("Postal code cannot be blank.")
    );
    assert_eq!(group.get_error("email").as_deref(), Some("L1"));
    assert_eq!(group.get_error("zip"), None);
    assert_eq!(group.get_error("nobody.zip"), None);
}

/// **VALUE**: Verifies grouped errors use dotted keys for sub-model attributes.
///
/// **WHY THIS MATTERS**: Per-field rendering needs keys that match input names; merging raw
/// per-model maps would let `addr.city` and `billing.city` overwrite each other.
///
/// **BUG THIS CATCHES**: Would catch sub-model keys being emitted without their prefix.
#[test]
fn given_errors_everywhere_when_grouping_by_attribute_then_keys_are_dotted() {
    let mut group = ModelGroupForm::new(form_with_local_error())
        .with_model("addr", address())
        .with_model("billing", address());
    group.set("billing.zip", json!("0150")).unwrap();
    group.validate(None, false);

    let keys: Vec<String> = group
        .errors_by_attribute()
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    assert_eq!(
        keys,
        vec!["email", "addr.city", "addr.zip", "billing.city"]
    );
}
