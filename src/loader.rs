//! Redirect table loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::{parse_json, parse_yaml, ParseError};
use crate::table::RedirectTable;

/// Wire format of a redirect table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Yaml,
    Json,
}

impl TableFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// `.yaml`/`.yml` → Yaml, `.json` → Json, anything else → None.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Error type for table loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized table format: {}", .0.display())]
    UnknownFormat(PathBuf),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Load a redirect table from a YAML or JSON file.
///
/// The only I/O in the crate; nothing on a request path calls this.
pub fn load_table(path: &Path) -> Result<RedirectTable, LoadError> {
    let format = TableFormat::from_path(path)
        .ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;
    let raw = fs::read(path)?;

    let records = match format {
        TableFormat::Yaml => parse_yaml(&raw)?,
        TableFormat::Json => parse_json(&raw)?,
    };
    let table = RedirectTable::from_records(records);

    tracing::info!(path = ?path, entries = table.len(), "Redirect table loaded");
    Ok(table)
}
