//! The immutable path → destination URL lookup table.

use std::collections::HashMap;

use crate::table::record::PathUrl;

/// Exact-match mapping from request path to redirect destination.
///
/// Built once, read-only afterwards. The request-handling layer shares it
/// across concurrent invocations without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
    entries: HashMap<String, String>,
}

impl RedirectTable {
    /// Fold an ordered record sequence into a table.
    ///
    /// Records are applied in sequence order, so the last record for a
    /// given path wins. Duplicates are not an error.
    pub fn from_records(records: Vec<PathUrl>) -> Self {
        let mut entries = HashMap::with_capacity(records.len());
        for record in records {
            entries.insert(record.path, record.url);
        }
        Self { entries }
    }

    /// Look up the destination URL for a path.
    ///
    /// Exact string equality, case-sensitive. A miss is not an error; it is
    /// the signal to delegate to the fallback.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for RedirectTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<P, U> FromIterator<(P, U)> for RedirectTable
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(p, u)| (p.into(), u.into()))
                .collect(),
        }
    }
}
