//! Title normalization into join keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters dropped from a title after trimming and lower-casing.
const STRIPPED: [char; 3] = [' ', ':', ','];

/// Canonicalizes a free-text title.
///
/// Trims surrounding whitespace, lower-cases, then removes every space, colon
/// and comma. The mapping is lossy: distinct titles may share a key.
#[must_use]
pub fn normalize_title(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect()
}

/// A normalized title used as the cross-catalog join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Normalizes `raw` into a key.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize_title(raw))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
