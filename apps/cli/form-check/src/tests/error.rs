// Unit tests for error module
// Tests message format and location tracking

use crate::error::FormCheckError;

use form_model::ModelError;

/// **VALUE**: Verifies constructor helpers record the caller's location in the message.
///
/// **WHY THIS MATTERS**: When a check fails in CI, the message is all we get; the location
/// points at the code that raised it.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the helpers, which
/// would make every error point at `error.rs`.
#[test]
fn given_input_error_when_formatted_then_includes_path_and_caller_location() {
    // GIVEN: An input error raised here
    let err = FormCheckError::input("posted.json", "expected a JSON object");

    // WHEN: Formatting it
    let message = err.to_string();

    // THEN: Kind, path, reason and this file's location are present
    assert!(message.starts_with("Input Error: posted.json: expected a JSON object"));
    assert!(message.contains("tests"), "Location should point at the test: {message}");
}

/// **VALUE**: Verifies model errors pass through transparently.
#[test]
fn given_model_error_when_converted_then_message_is_unchanged() {
    let model_error = ModelError::undefined_attribute("address", "country");
    let expected = model_error.to_string();

    let err: FormCheckError = model_error.into();

    assert_eq!(err.to_string(), expected);
}
