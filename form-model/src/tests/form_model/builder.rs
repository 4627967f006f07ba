use crate::{AttributeBuilder, FormModel, Model, ModelError};

/// **VALUE**: Verifies that builder validation rejects an empty model name.
///
/// **WHY THIS MATTERS**: Model names appear in every undefined-attribute error and in
/// dotted paths. An empty name would produce paths like `.city`, which never resolve.
///
/// **BUG THIS CATCHES**: Would catch the name check being removed during refactoring.
#[test]
fn given_empty_model_name_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a name
    let builder = FormModel::builder("").with_attribute(AttributeBuilder::new("city"));

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Model name cannot be empty");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies attribute names containing a dot are refused.
///
/// **WHY THIS MATTERS**: Dots are the group addressing separator. A local attribute named
/// `addr.city` would be shadowed by (or shadow) sub-model `addr`.
///
/// **BUG THIS CATCHES**: Would catch ambiguous attribute names slipping into a model.
#[test]
fn given_dotted_attribute_name_when_building_then_returns_validation_error() {
    let result = FormModel::builder("signup")
        .with_attribute(AttributeBuilder::new("addr.city"))
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.contains("addr.city"), "got: {message}");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies duplicate attribute declarations are refused.
///
/// **BUG THIS CATCHES**: Would catch a second declaration silently shadowing the first one's
/// checks.
#[test]
fn given_duplicate_attribute_when_building_then_returns_validation_error() {
    let result = FormModel::builder("address")
        .with_attribute(AttributeBuilder::new("city"))
        .with_attribute(AttributeBuilder::new("city").required())
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Duplicate attribute 'city' on model 'address'");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies an invalid regular expression fails at build time with its attribute.
///
/// **WHY THIS MATTERS**: Failing at build time keeps `validate()` infallible.
///
/// **BUG THIS CATCHES**: Would catch patterns being compiled lazily during validation.
#[test]
fn given_invalid_pattern_when_building_then_returns_invalid_rule_error() {
    let result = FormModel::builder("address")
        .with_attribute(AttributeBuilder::new("zip").pattern("(unclosed"))
        .build();

    let err = result.unwrap_err();
    assert!(matches!(err, ModelError::InvalidRule { .. }));
    assert_eq!(err.attribute(), Some("zip"));
    assert!(err.to_string().contains("Invalid Rule Error: zip"));
}

/// **VALUE**: Verifies an invalid pattern error points at the code that called `build()`.
///
/// **BUG THIS CATCHES**: Would catch the error being raised inside a closure, which pins the
/// location to the builder module.
#[test]
fn given_invalid_pattern_when_building_then_location_is_the_build_call_site() {
    let err = FormModel::builder("address")
        .with_attribute(AttributeBuilder::new("zip").pattern("(unclosed"))
        .build()
        .unwrap_err();

    match err {
        ModelError::InvalidRule { location, .. } => {
            assert!(location.file.contains("tests"), "Unexpected location: {location}");
        }
        other => panic!("Expected InvalidRule error, got {other:?}"),
    }
}

/// **VALUE**: Verifies safety defaults: checked attributes are safe, unchecked are not,
/// and explicit markers win.
///
/// **WHY THIS MATTERS**: The safe list decides which posted fields reach the model.
///
/// **BUG THIS CATCHES**: Would catch unchecked attributes becoming mass-assignable.
#[test]
fn given_mixed_attributes_when_building_then_safe_list_follows_checks_and_markers() {
    let model = FormModel::builder("account")
        .with_attribute(AttributeBuilder::new("email").required())
        .with_attribute(AttributeBuilder::new("nickname").safe())
        .with_attribute(AttributeBuilder::new("role"))
        .with_attribute(AttributeBuilder::new("password").required().unsafe_())
        .build()
        .unwrap();

    assert_eq!(
        model.attribute_names(),
        vec!["email", "nickname", "role", "password"]
    );
    assert_eq!(model.safe_attribute_names(), vec!["email", "nickname"]);
}
