//! Dotted attribute names.

use std::fmt::{Display, Formatter, Result as FormatResult};

/// An external attribute name split into its addressing parts.
///
/// `addr.city` addresses attribute `city` of sub-model `addr`. A name without
/// a dot, or whose only dot is the first character, is a local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributePath<'n> {
    Local(&'n str),
    Nested { model: &'n str, attribute: &'n str },
}

impl<'n> AttributePath<'n> {
    /// Splits on the first dot. Never fails and never checks that the model exists.
    pub fn resolve(name: &'n str) -> Self {
        match name.split_once('.') {
            Some((model, attribute)) if !model.is_empty() => {
                AttributePath::Nested { model, attribute }
            }
            _ => AttributePath::Local(name),
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, AttributePath::Nested { .. })
    }
}

impl Display for AttributePath<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            AttributePath::Local(name) => write!(formatter, "{name}"),
            AttributePath::Nested { model, attribute } => write!(formatter, "{model}.{attribute}"),
        }
    }
}
