use thiserror::Error;

/// Errors produced while decoding structured redirect input.
///
/// Raised only when input bytes are not syntactically valid, or do not
/// deserialize into a sequence of records. Lookup misses, duplicate paths,
/// and malformed destination URLs are all non-errors.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input is not well-formed YAML, or not a sequence of records.
    #[error("invalid YAML redirect input: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input is not well-formed JSON, or not an array of records.
    #[error("invalid JSON redirect input: {0}")]
    Json(#[from] serde_json::Error),
}
