//! Error types for environment-file loading.
//!
//! Invariants:
//! - Every variant carries enough context to name the failing file or key.
//! - Messages never include variable values, so error output cannot leak
//!   secrets from an environment file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a value table from a file.
///
/// All of these are construction-time failures; lookups never error once a
/// table has been built.
#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("failed to open environment file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read environment file {path}: {source}")]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported environment file extension '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("unsupported {kind} value for variable '{key}'")]
    UnsupportedValueType { key: String, kind: &'static str },

    #[error("failed to parse environment file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("expected a top-level mapping with string keys in {path}")]
    UnexpectedDocument { path: PathBuf },
}
