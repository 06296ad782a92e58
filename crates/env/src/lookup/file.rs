//! File-backed chained environment lookup.
//!
//! Responsibilities:
//! - Eagerly parse a variable-definition file at construction into an
//!   immutable value table.
//! - Answer point lookups from that table, falling back to an optional
//!   parent lookup on a miss.
//!
//! Does NOT handle:
//! - Deciding which file to load.
//! - Re-reading the file after construction (no further I/O occurs).
//!
//! Invariants:
//! - The local table wins over the parent on every key collision, for both
//!   `lookup` and `variables`.
//! - An absent or empty path yields an empty local table that defers
//!   entirely to the parent.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::config::ServiceConfig;

use super::error::EnvFileError;
use super::union::map_union;
use super::{EnvironmentLookup, plain, structured};

/// Which value-table parser backs a [`FileEnvLookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Line-oriented `NAME=VALUE` with shell-like quoting.
    Plain,
    /// A `.yml`/`.yaml`/`.json` document holding a flat map of scalars.
    Structured,
}

impl FileFormat {
    /// Sniff the format from the file extension.
    ///
    /// The structured extensions are recognized; anything else is treated
    /// as plain format.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml" | "yaml" | "json") => FileFormat::Structured,
            _ => FileFormat::Plain,
        }
    }
}

/// Environment lookup backed by one parsed file plus an optional parent.
pub struct FileEnvLookup {
    variables: HashMap<String, String>,
    parent: Option<Arc<dyn EnvironmentLookup>>,
}

impl FileEnvLookup {
    /// Build a lookup from `file`, sniffing the format from its extension.
    ///
    /// `None` (or an empty path) produces an empty local table that defers
    /// entirely to `parent`. Parsing happens here; all later operations are
    /// in-memory.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvFileError`] if the file cannot be opened or read, or
    /// if its contents fail to parse. Construction is fail-fast: no partial
    /// table is ever produced.
    pub fn new<P: AsRef<Path>>(
        file: Option<P>,
        parent: Option<Arc<dyn EnvironmentLookup>>,
    ) -> Result<Self, EnvFileError> {
        Self::load(file.as_ref().map(AsRef::as_ref), None, parent)
    }

    /// Build a lookup from `file` with an explicitly selected backend.
    pub fn with_format<P: AsRef<Path>>(
        file: P,
        format: FileFormat,
        parent: Option<Arc<dyn EnvironmentLookup>>,
    ) -> Result<Self, EnvFileError> {
        Self::load(Some(file.as_ref()), Some(format), parent)
    }

    fn load(
        file: Option<&Path>,
        format: Option<FileFormat>,
        parent: Option<Arc<dyn EnvironmentLookup>>,
    ) -> Result<Self, EnvFileError> {
        // An empty path means "no file".
        let file = file.filter(|p| !p.as_os_str().is_empty());

        let variables = match file {
            None => HashMap::new(),
            Some(path) => {
                let format = format.unwrap_or_else(|| FileFormat::detect(path));
                let variables = match format {
                    FileFormat::Plain => plain::parse_file(path)?,
                    FileFormat::Structured => structured::parse_file(path)?,
                };
                tracing::debug!(
                    path = %path.display(),
                    entries = variables.len(),
                    "loaded environment file"
                );
                variables
            }
        };

        Ok(Self { variables, parent })
    }
}

// Hand-written so debug output reports table size, not variable values.
impl fmt::Debug for FileEnvLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileEnvLookup")
            .field("entries", &self.variables.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

impl EnvironmentLookup for FileEnvLookup {
    fn lookup(&self, key: &str, config: &ServiceConfig) -> Vec<String> {
        if let Some(value) = self.variables.get(key) {
            return vec![format!("{key}={value}")];
        }
        match &self.parent {
            Some(parent) => parent.lookup(key, config),
            None => Vec::new(),
        }
    }

    fn variables(&self) -> HashMap<String, String> {
        let inherited = self
            .parent
            .as_ref()
            .map(|parent| parent.variables())
            .unwrap_or_default();
        map_union(&self.variables, inherited)
    }
}
