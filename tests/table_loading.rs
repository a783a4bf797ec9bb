//! Loading redirect tables from disk.

use std::fs;
use std::path::Path;

use redirect_router::{load_table, LoadError};
use tempfile::tempdir;

#[test]
fn test_yaml_and_json_files_load_equivalent_tables() {
    let dir = tempdir().unwrap();

    let yaml_path = dir.path().join("redirects.yaml");
    fs::write(&yaml_path, "- path: /foo\n  url: https://foo.com\n").unwrap();

    let json_path = dir.path().join("redirects.json");
    fs::write(&json_path, r#"[{"path": "/foo", "url": "https://foo.com"}]"#).unwrap();

    let from_yaml = load_table(&yaml_path).unwrap();
    let from_json = load_table(&json_path).unwrap();

    assert_eq!(from_yaml, from_json);
    assert_eq!(from_yaml.lookup("/foo"), Some("https://foo.com"));
}

#[test]
fn test_unknown_extension_is_rejected() {
    let err = load_table(Path::new("redirects.toml")).unwrap_err();
    assert!(matches!(err, LoadError::UnknownFormat(_)));
}

#[test]
fn test_missing_file_surfaces_io_error() {
    let dir = tempdir().unwrap();
    let err = load_table(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_malformed_file_surfaces_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"path\": \"/a\"").unwrap();

    let err = load_table(&path).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}
