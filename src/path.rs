//! Path addressing: key sequences with a sentinel-joined canonical form.

use std::fmt;

/// Default join sentinel. Two characters deliberately outside the usual
/// key vocabulary (dots, underscores, camelCase all occur in real keys;
/// `§` does not). Joining is only invertible for keys that do not contain
/// the separator, which the persistence layer checks at load time.
pub const SENTINEL: &str = "§§";

/// Location of a node as the ordered keys from the root of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path addressing a tree's root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// This path extended by one child key.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Canonical sentinel-joined form, round-trip safe via [`KeyPath::parse`].
    pub fn sentinel(&self, separator: &str) -> String {
        self.segments.join(separator)
    }

    /// Recover a path from its sentinel-joined form.
    pub fn parse(text: &str, separator: &str) -> Self {
        if text.is_empty() {
            return Self::root();
        }
        Self {
            segments: text.split(separator).map(str::to_string).collect(),
        }
    }

    /// Human-readable dotted form for reports and flattened output.
    ///
    /// Not round-trip safe when a key itself contains a dot; display only.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}
