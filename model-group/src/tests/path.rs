// Unit tests for dotted attribute path resolution

use crate::AttributePath;

/// **VALUE**: Verifies the three canonical cases: dotted, bare, and leading-dot names.
///
/// **WHY THIS MATTERS**: Every group operation starts with this split. A leading dot must
/// not produce an empty model name, or `.city` would be routed to a model called "".
///
/// **BUG THIS CATCHES**: Would catch an `index >= 0` check replacing `index > 0`.
#[test]
fn given_dotted_bare_and_leading_dot_names_when_resolving_then_only_dotted_splits() {
    assert_eq!(
        AttributePath::resolve("a.b"),
        AttributePath::Nested {
            model: "a",
            attribute: "b"
        }
    );
    assert_eq!(AttributePath::resolve("a"), AttributePath::Local("a"));
    assert_eq!(AttributePath::resolve(".a"), AttributePath::Local(".a"));
}

/// **VALUE**: Verifies the split happens at the first dot only.
///
/// **WHY THIS MATTERS**: Nested groups receive the remainder (`inner.city`) and resolve it
/// again themselves.
///
/// **BUG THIS CATCHES**: Would catch splitting at the last dot or dropping extra segments.
#[test]
fn given_multiple_dots_when_resolving_then_splits_at_first_dot() {
    assert_eq!(
        AttributePath::resolve("outer.inner.city"),
        AttributePath::Nested {
            model: "outer",
            attribute: "inner.city"
        }
    );
}

/// **VALUE**: Verifies degenerate inputs stay total and predictable.
#[test]
fn given_degenerate_names_when_resolving_then_never_fails() {
    assert_eq!(AttributePath::resolve(""), AttributePath::Local(""));
    assert_eq!(AttributePath::resolve("."), AttributePath::Local("."));
    assert_eq!(
        AttributePath::resolve("a."),
        AttributePath::Nested {
            model: "a",
            attribute: ""
        }
    );
    assert!(!AttributePath::resolve("..a").is_nested());
}

/// **VALUE**: Verifies Display rebuilds the external name.
#[test]
fn given_resolved_path_when_formatted_then_matches_original_name() {
    for name in ["addr.city", "city", ".city", "a.b.c"] {
        assert_eq!(AttributePath::resolve(name).to_string(), name);
    }
}
