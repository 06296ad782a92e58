//! In-memory lookup source.

use std::collections::HashMap;

use crate::config::ServiceConfig;

use super::EnvironmentLookup;

/// Environment lookup backed by a caller-supplied table.
///
/// Useful as the terminal link of a chain and as a test double for any
/// other `EnvironmentLookup` implementer.
#[derive(Debug, Clone, Default)]
pub struct MapEnvLookup {
    variables: HashMap<String, String>,
}

impl MapEnvLookup {
    pub fn new(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }
}

impl FromIterator<(String, String)> for MapEnvLookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl EnvironmentLookup for MapEnvLookup {
    fn lookup(&self, key: &str, _config: &ServiceConfig) -> Vec<String> {
        match self.variables.get(key) {
            Some(value) => vec![format!("{key}={value}")],
            None => Vec::new(),
        }
    }

    fn variables(&self) -> HashMap<String, String> {
        self.variables.clone()
    }
}
