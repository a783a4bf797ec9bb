//! The decoded form of one redirect entry.

use serde::Deserialize;

/// A single path-to-URL association as it appears in structured input.
///
/// Both fields default to the empty string when missing from the input
/// record, mirroring the permissiveness of the wire formats. Callers should
/// not rely on that looseness; it exists so that sloppy-but-parseable input
/// is not rejected. Unknown keys in input records are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathUrl {
    /// Request path to match, verbatim (no normalization).
    #[serde(default)]
    pub path: String,

    /// Destination URL, verbatim (no validation).
    #[serde(default)]
    pub url: String,
}

impl PathUrl {
    /// Create a record from literal parts.
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}
