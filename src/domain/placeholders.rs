//! Placeholder mapping and the pure substitution step.
//!
//! Markers are applied in insertion order, each exactly once over the whole
//! text. Replacement values are never re-scanned for markers applied earlier.

/// Ordered, key-unique mapping of placeholder markers to replacement values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMapping {
    entries: Vec<(String, String)>,
}

impl PlaceholderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a marker, replacing the value in place if the marker is already present.
    pub fn insert(&mut self, marker: impl Into<String>, value: impl Into<String>) {
        let marker = marker.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == marker) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((marker, value)),
        }
    }

    pub fn get(&self, marker: &str) -> Option<&str> {
        self.entries.iter().find(|(m, _)| m == marker).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(m, v)| (m.as_str(), v.as_str()))
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(m, _)| m.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M: Into<String>, V: Into<String>> FromIterator<(M, V)> for PlaceholderMapping {
    fn from_iter<I: IntoIterator<Item = (M, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (marker, value) in iter {
            mapping.insert(marker, value);
        }
        mapping
    }
}

/// Number of occurrences replaced for one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub marker: String,
    pub count: usize,
}

/// Result of substituting a mapping into template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedText {
    pub text: String,
    pub replacements: Vec<Replacement>,
}

/// Replace every non-overlapping occurrence of each marker with its value.
///
/// Empty markers are skipped.
pub fn render_text(template: &str, mapping: &PlaceholderMapping) -> RenderedText {
    let mut text = template.to_string();
    let mut replacements = Vec::with_capacity(mapping.len());

    for (marker, value) in mapping.iter() {
        if marker.is_empty() {
            continue;
        }
        let count = text.matches(marker).count();
        if count > 0 {
            text = text.replace(marker, value);
        }
        replacements.push(Replacement { marker: marker.to_string(), count });
    }

    RenderedText { text, replacements }
}
