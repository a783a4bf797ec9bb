//! JSON input adapter.

use crate::parser::ParseError;
use crate::table::PathUrl;

/// Decode a JSON array of `"path"`/`"url"` objects into ordered records.
///
/// Expected shape:
///
/// ```json
/// [ {"path": "/SomePath", "url": "https://..."} ]
/// ```
pub fn parse_json(raw: &[u8]) -> Result<Vec<PathUrl>, ParseError> {
    let records: Vec<PathUrl> = serde_json::from_slice(raw)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_array_in_order() {
        let raw = br#"[
            {"path": "/foo", "url": "https://foo.com"},
            {"path": "/bar", "url": "https://bar.com"}
        ]"#;
        let records = parse_json(raw).unwrap();

        assert_eq!(
            records,
            vec![
                PathUrl::new("/foo", "https://foo.com"),
                PathUrl::new("/bar", "https://bar.com"),
            ]
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = br#"[{"path": "/foo", "url": "https://foo.com", "owner": "ops"}]"#;
        let records = parse_json(raw).unwrap();

        assert_eq!(records, vec![PathUrl::new("/foo", "https://foo.com")]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw = br#"[{"url": "https://foo.com"}]"#;
        let records = parse_json(raw).unwrap();

        assert_eq!(records, vec![PathUrl::new("", "https://foo.com")]);
    }

    #[test]
    fn test_truncated_array_is_an_error() {
        let raw = br#"[{"path": "/foo", "url": "https://foo.com"}"#;
        assert!(parse_json(raw).is_err());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        // A top-level object, not an array of records.
        let raw = br#"{"path": "/foo", "url": "https://foo.com"}"#;
        assert!(parse_json(raw).is_err());
    }
}
