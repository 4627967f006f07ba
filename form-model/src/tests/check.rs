use crate::{AttributeValue, Check};

use regex::Regex;
use serde_json::json;

/// **VALUE**: Verifies `Required` treats null, whitespace and empty collections as missing.
///
/// **WHY THIS MATTERS**: Posted form fields arrive as blank strings, not nulls. Treating
/// `"  "` as present would let empty submissions validate.
///
/// **BUG THIS CATCHES**: Would catch dropping the trim or the collection cases.
#[test]
fn given_blank_values_when_running_required_then_reports_cannot_be_blank() {
    for blank in [json!(null), json!(""), json!("   "), json!([]), json!({})] {
        assert_eq!(
            Check::Required.run("City", &blank),
            Some(String::from("City cannot be blank.")),
            "{blank} should count as blank"
        );
    }

    assert_eq!(Check::Required.run("City", &json!("Oslo")), None);
    assert_eq!(Check::Required.run("Count", &json!(0)), None);
    assert_eq!(Check::Required.run("Flag", &json!(false)), None);
}

/// **VALUE**: Verifies length bounds, including the numeric text form and skipped blanks.
///
/// **BUG THIS CATCHES**: Would catch byte counting instead of character counting, or a
/// length check firing on an empty optional field.
#[test]
fn given_length_bounds_when_running_then_reports_short_and_long_values() {
    let check = Check::Length {
        min: Some(2),
        max: Some(4),
    };

    assert_eq!(
        check.run("Code", &json!("a")),
        Some(String::from("Code is too short (minimum is 2 characters)."))
    );
    assert_eq!(
        check.run("Code", &json!("abcde")),
        Some(String::from("Code is too long (maximum is 4 characters)."))
    );
    assert_eq!(check.run("Code", &json!("øæå")), None);
    assert_eq!(check.run("Code", &json!(123)), None);
    assert_eq!(check.run("Code", &json!("")), None);
    assert_eq!(
        check.run("Code", &json!(["ab"])),
        Some(String::from("Code is invalid."))
    );
}

/// **VALUE**: Verifies pattern matching on strings and rejection of other types.
#[test]
fn given_pattern_when_running_then_matches_strings_only() {
    let check = Check::Pattern(Regex::new(r"^\d{4}$").unwrap());

    assert_eq!(check.run("Zip", &json!("0150")), None);
    assert_eq!(
        check.run("Zip", &json!("01a0")),
        Some(String::from("Zip is invalid."))
    );
    assert_eq!(
        check.run("Zip", &json!(150)),
        Some(String::from("Zip is invalid."))
    );
    assert_eq!(check.run("Zip", &json!(null)), None);
}

/// **VALUE**: Verifies custom checks substitute the label into their message.
#[test]
fn given_custom_check_when_predicate_fails_then_message_uses_label() {
    fn is_true(value: &AttributeValue) -> bool {
        value.as_bool() == Some(true)
    }

    let check = Check::Custom {
        message: String::from("{attribute} must be accepted."),
        check: is_true,
    };

    assert_eq!(
        check.run("Terms", &json!(false)),
        Some(String::from("Terms must be accepted."))
    );
    assert_eq!(check.run("Terms", &json!(true)), None);
}
