//! Structured-document parser for YAML and JSON variable files.
//!
//! Responsibilities:
//! - Gate on the `.yml`/`.yaml`/`.json` file extension.
//! - Parse a flat top-level mapping and coerce scalar values to strings.
//!
//! Does NOT handle:
//! - Plain `NAME=VALUE` files (see plain.rs).
//! - Nested structures: a list, map, or null value fails construction.
//!
//! Invariants:
//! - Document parse failures are surfaced, never swallowed into an empty
//!   table.
//! - Coercion is lossless for strings, integers, floats, and booleans;
//!   everything else is rejected naming the offending key and its kind.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::EnvFileError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum DocumentKind {
    Yaml,
    Json,
}

/// Map a recognized extension to its document kind.
pub(crate) fn document_kind(path: &Path) -> Result<DocumentKind, EnvFileError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yml" | "yaml") => Ok(DocumentKind::Yaml),
        Some("json") => Ok(DocumentKind::Json),
        other => Err(EnvFileError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: other.unwrap_or_default().to_string(),
        }),
    }
}

/// Open `path` and parse it as a structured variable document.
///
/// The extension is checked before any I/O so an unsupported format fails
/// the same way whether or not the file exists.
pub(crate) fn parse_file(path: &Path) -> Result<HashMap<String, String>, EnvFileError> {
    let kind = document_kind(path)?;
    let mut handle = File::open(path).map_err(|source| EnvFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    handle
        .read_to_string(&mut contents)
        .map_err(|source| EnvFileError::Scan {
            path: path.to_path_buf(),
            source,
        })?;
    parse_document(path, kind, &contents)
}

/// Parse document `contents` of the given kind into a value table.
pub(crate) fn parse_document(
    path: &Path,
    kind: DocumentKind,
    contents: &str,
) -> Result<HashMap<String, String>, EnvFileError> {
    match kind {
        DocumentKind::Yaml => parse_yaml(path, contents),
        DocumentKind::Json => parse_json(path, contents),
    }
}

fn parse_yaml(path: &Path, contents: &str) -> Result<HashMap<String, String>, EnvFileError> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|e| parse_error(path, &e))?;
    let serde_yaml::Value::Mapping(mapping) = document else {
        return Err(unexpected_document(path));
    };

    let mut variables = HashMap::new();
    for (key, value) in &mapping {
        let Some(key) = key.as_str() else {
            return Err(unexpected_document(path));
        };
        variables.insert(key.to_string(), coerce_yaml(key, value)?);
    }
    Ok(variables)
}

fn parse_json(path: &Path, contents: &str) -> Result<HashMap<String, String>, EnvFileError> {
    let document: serde_json::Value =
        serde_json::from_str(contents).map_err(|e| parse_error(path, &e))?;
    let serde_json::Value::Object(object) = document else {
        return Err(unexpected_document(path));
    };

    let mut variables = HashMap::new();
    for (key, value) in &object {
        variables.insert(key.clone(), coerce_json(key, value)?);
    }
    Ok(variables)
}

fn coerce_yaml(key: &str, value: &serde_yaml::Value) -> Result<String, EnvFileError> {
    use serde_yaml::Value;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(EnvFileError::UnsupportedValueType {
            key: key.to_string(),
            kind: yaml_kind(other),
        }),
    }
}

fn coerce_json(key: &str, value: &serde_json::Value) -> Result<String, EnvFileError> {
    use serde_json::Value;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(EnvFileError::UnsupportedValueType {
            key: key.to_string(),
            kind: json_kind(other),
        }),
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;
    match value {
        Value::Null => "null",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
        Value::Bool(_) | Value::Number(_) | Value::String(_) => "scalar",
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Bool(_) | Value::Number(_) | Value::String(_) => "scalar",
    }
}

fn parse_error(path: &Path, source: &dyn std::error::Error) -> EnvFileError {
    EnvFileError::Parse {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

fn unexpected_document(path: &Path) -> EnvFileError {
    EnvFileError::UnexpectedDocument {
        path: path.to_path_buf(),
    }
}
