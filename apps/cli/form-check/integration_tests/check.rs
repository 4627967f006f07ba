use form_check::args::CliArgs;
use form_check::check::run;
use form_check::error::FormCheckError;

use std::fs;
use std::path::Path;

use tempfile::TempDir;

// ============================================================================
// Integration tests for the full load -> bind -> validate -> report cycle
// ============================================================================

const DEFINITION: &str = r#"
[form]
name = "signup"

[[form.attributes]]
name = "email"
rules = [{ kind = "required" }]

[[form.attributes]]
name = "role"
default = "member"

[[models]]
name = "address"

[[models.attributes]]
name = "city"
rules = [{ kind = "required" }]

[[models.attributes]]
name = "zip"
label = "Postal code"
rules = [{ kind = "required" }, { kind = "pattern", pattern = '^\d{4}$' }]
"#;

fn write_files(dir: &Path, definition: &str, input: &str) -> CliArgs {
    let definition_path = dir.join("form.toml");
    let input_path = dir.join("input.json");
    fs::write(&definition_path, definition).unwrap();
    fs::write(&input_path, input).unwrap();

    CliArgs {
        definition: definition_path,
        input: input_path,
        log_dir: None,
        all: false,
    }
}

/// **VALUE**: Tests a complete, valid submission across local and dotted fields.
///
/// **WHY THIS MATTERS**: This is the whole request cycle the tool exists to exercise.
///
/// **BUG THIS CATCHES**: Would catch dotted input keys not reaching sub-models when the
/// definition is loaded from disk.
#[test]
fn given_complete_input_when_running_then_report_is_valid() {
    // GIVEN: A definition and a complete submission
    let dir = TempDir::new().unwrap();
    let args = write_files(
        dir.path(),
        DEFINITION,
        r#"{"email": "kari@example.no", "address.city": "Oslo", "address.zip": "0150"}"#,
    );

    // WHEN: Running the check
    let report = run(&args).unwrap();

    // THEN: Everything validates
    assert!(report.valid, "Unexpected errors: {:?}", report.errors);
    assert!(report.errors.is_empty());
    assert_eq!(report.exit_code(), 0);
}

/// **VALUE**: Tests that errors come back keyed by input name with labels.
#[test]
fn given_incomplete_input_when_running_then_report_lists_dotted_errors() {
    let dir = TempDir::new().unwrap();
    let args = write_files(
        dir.path(),
        DEFINITION,
        r#"{"email": "", "address.zip": "12"}"#,
    );

    let report = run(&args).unwrap();

    assert!(!report.valid);
    let attributes: Vec<&str> = report
        .errors
        .iter()
        .map(|field| field.attribute.as_str())
        .collect();
    assert_eq!(attributes, vec!["email", "address.city", "address.zip"]);
    assert_eq!(report.errors[2].messages, vec!["Postal code is invalid."]);
}

/// **VALUE**: Tests that `--all` lifts the local safe filter for unchecked attributes.
///
/// **WHY THIS MATTERS**: Trusted callers (admin tools) bind every declared attribute.
#[test]
fn given_unsafe_local_field_when_running_with_and_without_all_then_only_all_binds_it() {
    // `role` is explicitly unsafe; its pattern only fails if the posted value is bound
    let definition = r#"
        [form]
        name = "admin"

        [[form.attributes]]
        name = "role"
        safe = false
        default = "member"
        rules = [{ kind = "pattern", pattern = '^member$' }]
    "#;
    let dir = TempDir::new().unwrap();
    let mut args = write_files(dir.path(), definition, r#"{"role": "admin"}"#);

    let filtered = run(&args).unwrap();
    assert!(filtered.valid, "Unsafe role should not have been bound");

    args.all = true;
    let unfiltered = run(&args).unwrap();
    assert!(!unfiltered.valid, "--all should bind role and fail its pattern");
}

/// **VALUE**: Tests that non-object input is rejected with the file named.
#[test]
fn given_array_input_when_running_then_returns_input_error() {
    let dir = TempDir::new().unwrap();
    let args = write_files(dir.path(), DEFINITION, "[1, 2]");

    match run(&args).unwrap_err() {
        FormCheckError::Input { path, reason, .. } => {
            assert!(path.ends_with("input.json"));
            assert!(reason.contains("expected a JSON object"));
        }
        other => panic!("Expected Input error, got {other:?}"),
    }
}

/// **VALUE**: Tests that a missing definition file is a definition error.
#[test]
fn given_missing_definition_when_running_then_returns_definition_error() {
    let dir = TempDir::new().unwrap();
    let mut args = write_files(dir.path(), DEFINITION, "{}");
    args.definition = dir.path().join("absent.toml");

    let err = run(&args).unwrap_err();

    assert!(matches!(err, FormCheckError::Definition { .. }));
    assert!(err.to_string().contains("absent.toml"));
}
