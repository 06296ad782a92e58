//! Process-environment lookup source.

use std::collections::HashMap;

use crate::config::ServiceConfig;

use super::EnvironmentLookup;

/// Resolves variables from the environment of the running process.
///
/// Read-only: this source never mutates the process environment. Variables
/// whose names or values are not valid Unicode are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvLookup;

impl EnvironmentLookup for OsEnvLookup {
    fn lookup(&self, key: &str, _config: &ServiceConfig) -> Vec<String> {
        match std::env::var(key) {
            Ok(value) => vec![format!("{key}={value}")],
            Err(_) => Vec::new(),
        }
    }

    fn variables(&self) -> HashMap<String, String> {
        // vars_os instead of vars: the latter panics on non-Unicode entries.
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}
