//! Human-readable labels derived from attribute names.

/// Turns an attribute name into a display label.
///
/// `firstName` becomes `First Name`, `post_code` becomes `Post Code` and
/// `URL` becomes `Url`. Runs of separators are not collapsed.
pub fn generate_attribute_label(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut previous_upper = false;

    for c in name.chars() {
        let upper = c.is_ascii_uppercase();
        if upper && !previous_upper {
            spaced.push(' ');
        }
        previous_upper = upper;

        match c {
            '-' | '_' | '.' => spaced.push(' '),
            _ => spaced.push(c.to_ascii_lowercase()),
        }
    }

    capitalize_words(spaced.trim())
}

fn capitalize_words(text: &str) -> String {
    let mut label = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    label
}
