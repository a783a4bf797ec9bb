//! YAML input adapter.

use crate::parser::ParseError;
use crate::table::PathUrl;

/// Decode a YAML sequence of `path`/`url` mappings into ordered records.
///
/// Expected shape:
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
pub fn parse_yaml(raw: &[u8]) -> Result<Vec<PathUrl>, ParseError> {
    let records: Vec<PathUrl> = serde_yaml::from_slice(raw)?;
    Ok(records)
}
