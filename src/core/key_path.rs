//! Dot-separated key paths into nested front matter
//!
//! `a.b.c` addresses key `c` inside mapping `b` inside mapping `a`. Splitting
//! is literal: there is no quoting or escaping, and an empty segment in the
//! middle of a path (`a..b`) is the empty-string key. The empty input is the
//! root path, which addresses the whole front matter.

use std::fmt;

/// A parsed key path
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The root path (no segments)
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a key path by splitting on `.`
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::root();
        }
        Self {
            segments: input.split('.').map(str::to_string).collect(),
        }
    }

    /// Create a key path from already split segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the parent segments and the final key
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.segments
            .split_last()
            .map(|(last, parents)| (last.as_str(), parents))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
