//! Comma List Value Object
//!
//! The text codec used by roster forms: a single line such as
//! `"Hall A, Hall B"` on input, an ordered list of names internally.
//!
//! Segments are trimmed; empty segments (from `"A,,B"` or a trailing comma)
//! are dropped.

/// Ordered list of trimmed, non-empty strings parsed from comma-separated text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommaList(Vec<String>);

impl CommaList {
    pub const SEPARATOR: char = ',';
    pub const JOINER: &'static str = ", ";

    /// Split on `,`, trim each segment, drop empty segments.
    pub fn parse(text: &str) -> Self {
        Self(
            text.split(Self::SEPARATOR)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Render a list the way forms display it.
    pub fn join<S: AsRef<str>>(items: &[S]) -> String {
        items
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(Self::JOINER)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for CommaList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Self::join(&self.0))
    }
}

impl From<Vec<String>> for CommaList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}
