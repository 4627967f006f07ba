//! Checks attached to `FormModel` attributes.

use crate::value::{AttributeValue, is_empty_value};

use regex::Regex;

/// One check run against an attribute value during validation.
///
/// Messages substitute the attribute label for `{attribute}`.
#[derive(Debug, Clone)]
pub enum Check {
    /// Rejects null, blank strings and empty collections.
    Required,

    /// Character-count bounds for strings (and the text form of numbers).
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },

    /// String must match the expression.
    Pattern(Regex),

    /// Caller-supplied predicate; `message` is used when it returns false.
    Custom {
        message: String,
        check: fn(&AttributeValue) -> bool,
    },
}

impl Check {
    /// Returns the failure message, if any.
    pub fn run(&self, label: &str, value: &AttributeValue) -> Option<String> {
        match self {
            Check::Required => {
                is_empty_value(value).then(|| format!("{label} cannot be blank."))
            }
            Check::Length { min, max } => {
                if is_empty_value(value) {
                    return None;
                }

                let length = match value {
                    AttributeValue::String(text) => text.chars().count(),
                    AttributeValue::Number(number) => number.to_string().chars().count(),
                    _ => return Some(format!("{label} is invalid.")),
                };

                if let Some(min) = min.filter(|min| length < *min) {
                    return Some(format!(
                        "{label} is too short (minimum is {min} characters)."
                    ));
                }
                if let Some(max) = max.filter(|max| length > *max) {
                    return Some(format!(
                        "{label} is too long (maximum is {max} characters)."
                    ));
                }
                None
            }
            Check::Pattern(pattern) => {
                if is_empty_value(value) {
                    return None;
                }

                match value {
                    AttributeValue::String(text) if pattern.is_match(text) => None,
                    _ => Some(format!("{label} is invalid.")),
                }
            }
            Check::Custom { message, check } => {
                (!check(value)).then(|| message.replace("{attribute}", label))
            }
        }
    }
}
