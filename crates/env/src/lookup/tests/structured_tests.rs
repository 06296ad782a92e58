//! Tests for the structured YAML/JSON parser.

use std::path::Path;

use crate::lookup::error::EnvFileError;
use crate::lookup::structured::{self, DocumentKind};

fn parse_json(contents: &str) -> Result<std::collections::HashMap<String, String>, EnvFileError> {
    structured::parse_document(Path::new("vars.json"), DocumentKind::Json, contents)
}

fn parse_yaml(contents: &str) -> Result<std::collections::HashMap<String, String>, EnvFileError> {
    structured::parse_document(Path::new("vars.yml"), DocumentKind::Yaml, contents)
}

#[test]
fn test_json_scalars_coerce_to_strings() {
    let vars = parse_json(r#"{"A": 1, "B": true, "C": "x"}"#).unwrap();
    assert_eq!(vars.get("A").map(String::as_str), Some("1"));
    assert_eq!(vars.get("B").map(String::as_str), Some("true"));
    assert_eq!(vars.get("C").map(String::as_str), Some("x"));
}

#[test]
fn test_json_float_uses_default_representation() {
    let vars = parse_json(r#"{"RATIO": 1.5}"#).unwrap();
    assert_eq!(vars.get("RATIO").map(String::as_str), Some("1.5"));
}

#[test]
fn test_json_negative_and_large_integers() {
    let vars = parse_json(r#"{"NEG": -7, "BIG": 4294967296}"#).unwrap();
    assert_eq!(vars.get("NEG").map(String::as_str), Some("-7"));
    assert_eq!(vars.get("BIG").map(String::as_str), Some("4294967296"));
}

#[test]
fn test_yaml_scalars_coerce_to_strings() {
    let vars = parse_yaml("PORT: 8080\nDEBUG: false\nNAME: web\n").unwrap();
    assert_eq!(vars.get("PORT").map(String::as_str), Some("8080"));
    assert_eq!(vars.get("DEBUG").map(String::as_str), Some("false"));
    assert_eq!(vars.get("NAME").map(String::as_str), Some("web"));
}

#[test]
fn test_json_array_value_is_rejected_naming_the_key() {
    let err = parse_json(r#"{"GOOD": "x", "BAD": [1, 2]}"#).unwrap_err();
    match err {
        EnvFileError::UnsupportedValueType { key, kind } => {
            assert_eq!(key, "BAD");
            assert_eq!(kind, "array");
        }
        other => panic!("expected UnsupportedValueType, got {other}"),
    }
}

#[test]
fn test_yaml_nested_mapping_value_is_rejected_naming_the_key() {
    let err = parse_yaml("OUTER:\n  inner: 1\n").unwrap_err();
    match err {
        EnvFileError::UnsupportedValueType { key, kind } => {
            assert_eq!(key, "OUTER");
            assert_eq!(kind, "mapping");
        }
        other => panic!("expected UnsupportedValueType, got {other}"),
    }
}

#[test]
fn test_null_value_is_rejected() {
    let err = parse_json(r#"{"EMPTY": null}"#).unwrap_err();
    match err {
        EnvFileError::UnsupportedValueType { key, kind } => {
            assert_eq!(key, "EMPTY");
            assert_eq!(kind, "null");
        }
        other => panic!("expected UnsupportedValueType, got {other}"),
    }
}

#[test]
fn test_malformed_json_surfaces_parse_error() {
    let err = parse_json(r#"{"A": "#).unwrap_err();
    assert!(
        matches!(err, EnvFileError::Parse { .. }),
        "malformed document should fail construction, got {err}"
    );
}

#[test]
fn test_top_level_array_is_rejected() {
    let err = parse_json(r#"[1, 2, 3]"#).unwrap_err();
    assert!(
        matches!(err, EnvFileError::UnexpectedDocument { .. }),
        "non-mapping document should be rejected, got {err}"
    );
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let err = structured::document_kind(Path::new("vars.txt")).unwrap_err();
    match err {
        EnvFileError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "txt"),
        other => panic!("expected UnsupportedFormat, got {other}"),
    }
}

#[test]
fn test_missing_extension_is_rejected() {
    let err = structured::document_kind(Path::new("vars")).unwrap_err();
    assert!(matches!(err, EnvFileError::UnsupportedFormat { .. }));
}

#[test]
fn test_error_messages_name_key_but_not_value() {
    let err = parse_json(r#"{"SECRET_LIST": ["hunter2"]}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("SECRET_LIST"), "message: {message}");
    assert!(
        !message.contains("hunter2"),
        "error must not leak values: {message}"
    );
}
