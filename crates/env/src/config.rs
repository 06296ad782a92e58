//! Service configuration context passed through lookup calls.
//!
//! Responsibilities:
//! - Define the per-service configuration handed to `EnvironmentLookup::lookup`.
//!
//! Does NOT handle:
//! - Variable resolution itself (see the lookup module).
//! - Loading service definitions from disk.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration of a single service, carried as context on lookup calls.
///
/// The file-backed lookup resolves variables by name alone and ignores this
/// context; other implementers may use it to scope their answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name as written in the service definition.
    pub name: String,

    /// Container image, if the definition names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Free-form labels attached to the service.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl ServiceConfig {
    /// Create a context for the named service.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
