use crate::helpers::{RecordingModel, address, signup_form};

use form_model::Model;
use model_group::ModelGroupForm;

use serde_json::json;

/// **VALUE**: Verifies one invalid sub-model makes the group invalid and no sub-model is skipped.
///
/// **WHY THIS MATTERS**: Users must see every field error in one round trip. Short-circuiting
/// after the first failure would hide the later models' errors until resubmission.
///
/// **BUG THIS CATCHES**: Would catch `valid && model.validate(..)` ordering, which skips
/// validation once `valid` is false.
#[test]
fn given_invalid_first_sub_model_when_validating_then_every_sub_model_runs_once() {
    // GIVEN: A valid local form and three recording sub-models, the first one invalid
    let mut form = signup_form();
    form.set_attribute("email", json!("kari@example.no")).unwrap();
    let mut first = RecordingModel::invalid();
    let mut second = RecordingModel::valid();
    let mut third = RecordingModel::valid();

    // WHEN: Validating the group
    let valid = {
        let mut group = ModelGroupForm::new(form)
            .with_model("first", &mut first)
            .with_model("second", &mut second)
            .with_model("third", &mut third);
        group.validate(None, true)
    };

    // THEN: The group is invalid and each sub-model ran exactly once
    assert!(!valid);
    assert_eq!(first.validate_calls, 1);
    assert_eq!(second.validate_calls, 1);
    assert_eq!(third.validate_calls, 1);
}

/// **VALUE**: Verifies the attribute subset reaches only the local model.
///
/// **WHY THIS MATTERS**: Sub-models always validate in full; the subset names local attributes
/// and would be meaningless to them.
///
/// **BUG THIS CATCHES**: Would catch the subset being forwarded to sub-models.
#[test]
fn given_attribute_subset_when_validating_then_sub_models_get_none_and_same_clear_flag() {
    let mut recorder = RecordingModel::valid();

    {
        let mut group = ModelGroupForm::new(signup_form()).with_model("rec", &mut recorder);
        group.validate(Some(&["email"]), false);
        group.validate(None, true);
    }

    assert_eq!(recorder.validate_attributes, vec![None, None]);
    assert_eq!(recorder.validate_clear_flags, vec![false, true]);
}

/// **VALUE**: Verifies local failures alone make the group invalid.
#[test]
fn given_invalid_local_model_when_validating_then_group_is_invalid() {
    let mut recorder = RecordingModel::valid();

    let valid = ModelGroupForm::new(signup_form())
        .with_model("rec", &mut recorder)
        .validate(None, true);

    assert!(!valid, "Blank email should fail local validation");
    assert_eq!(recorder.validate_calls, 1);
}

/// **VALUE**: Verifies an end-to-end bind and validate over real form models.
///
/// **WHY THIS MATTERS**: This is the request cycle the group exists for.
///
/// **BUG THIS CATCHES**: Would catch sub-model error state not being refreshed by validate.
#[test]
fn given_fixed_input_when_revalidating_then_group_becomes_valid() {
    let mut form = signup_form();
    form.set_attribute("email", json!("kari@example.no")).unwrap();
    let mut group = ModelGroupForm::new(form).with_model("addr", address());

    assert!(!group.validate(None, true));
    assert!(group.has_errors(Some("addr.city")));

    group.set("addr.city", json!("Oslo")).unwrap();
    group.set("addr.zip", json!("0150")).unwrap();

    assert!(group.validate(None, true));
    assert!(!group.has_errors(Some("addr.city")));
    assert!(group.get_errors(None).is_empty());
}
