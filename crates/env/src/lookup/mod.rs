//! Environment lookup chain.
//!
//! Responsibilities:
//! - Define the `EnvironmentLookup` capability implemented by every
//!   variable source.
//! - Provide the file-backed implementation (`FileEnvLookup`) with its two
//!   value-table parsers, plus process-environment and in-memory sources.
//!
//! Does NOT handle:
//! - Deciding which file to load (the caller supplies the path).
//! - Variable interpolation or expansion within values.
//! - Mutating the environment of the running process.
//!
//! Invariants:
//! - A lookup's own table is authoritative; the parent is consulted only on
//!   a miss, transitively through arbitrarily long chains.
//! - Value tables are built once at construction and never mutated, so
//!   concurrent readers need no locking.

mod error;
mod file;
mod map;
mod os;
mod plain;
mod structured;
mod union;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::config::ServiceConfig;

pub use error::EnvFileError;
pub use file::{FileEnvLookup, FileFormat};
pub use map::MapEnvLookup;
pub use os::OsEnvLookup;

/// A source of environment-variable values, chainable via a parent lookup.
///
/// Implementers answer point queries as `"KEY=VALUE"` strings and expose
/// their full resolved mapping. Both operations are pure queries.
pub trait EnvironmentLookup: Send + Sync {
    /// Resolve a single variable.
    ///
    /// Returns one `"key=value"` entry on a hit, the parent's result
    /// verbatim on a miss with a parent present, and an empty vector
    /// otherwise. `config` is the service being resolved; sources that
    /// answer by name alone ignore it.
    fn lookup(&self, key: &str, config: &ServiceConfig) -> Vec<String>;

    /// The full resolved mapping, with nearer links winning on collision.
    fn variables(&self) -> HashMap<String, String>;
}
