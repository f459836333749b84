//! Configuration Tests.
//!
//! Verifies defaults and JSON overrides for the sink settings.

use std::path::Path;

use wasm_index::IndexError;
use wasm_index::config::{Config, LineEnding};

#[test]
fn defaults_write_index_csv_with_crlf() {
    let config = Config::default();
    assert_eq!(config.output.path, Path::new("index.csv"));
    assert_eq!(config.output.line_ending, LineEnding::Crlf);
}

#[test]
fn empty_document_uses_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    assert_eq!(Config::from_json(r#"{"output": {}}"#).unwrap(), Config::default());
}

#[test]
fn overrides_path_and_line_ending() {
    let config =
        Config::from_json(r#"{"output": {"path": "out/wasm.csv", "line_ending": "LF"}}"#)
            .unwrap();
    assert_eq!(config.output.path, Path::new("out/wasm.csv"));
    assert_eq!(config.output.line_ending, LineEnding::Lf);
}

#[test]
fn rejects_unknown_line_ending() {
    let err = Config::from_json(r#"{"output": {"line_ending": "cr"}}"#).unwrap_err();
    assert!(matches!(err, IndexError::Config(_)));
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(Config::from_json("{"), Err(IndexError::Config(_))));
}
