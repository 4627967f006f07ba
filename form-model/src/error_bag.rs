//! Per-attribute validation messages.

/// Validation messages keyed by attribute, kept in the order attributes first failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBag {
    entries: Vec<(String, Vec<String>)>,
}

impl ErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        let attribute = attribute.into();
        match self.entries.iter_mut().find(|(name, _)| *name == attribute) {
            Some((_, messages)) => messages.push(message.into()),
            None => self.entries.push((attribute, vec![message.into()])),
        }
    }

    /// Drops messages for one attribute, or everything when `None`.
    pub fn clear(&mut self, attribute: Option<&str>) {
        match attribute {
            Some(attribute) => self.entries.retain(|(name, _)| name != attribute),
            None => self.entries.clear(),
        }
    }

    pub fn has(&self, attribute: Option<&str>) -> bool {
        match attribute {
            Some(attribute) => self.entries.iter().any(|(name, _)| name == attribute),
            None => !self.entries.is_empty(),
        }
    }

    /// Messages for one attribute, or all messages flattened in attribute order.
    pub fn messages(&self, attribute: Option<&str>) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(name, _)| attribute.is_none_or(|wanted| name == wanted))
            .flat_map(|(_, messages)| messages.iter().cloned())
            .collect()
    }

    pub fn first(&self, attribute: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(name, _)| name == attribute)
            .and_then(|(_, messages)| messages.first().cloned())
    }

    pub fn entries(&self) -> &[(String, Vec<String>)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
