//! Environment-variable resolution for service configuration.
//!
//! This crate provides the lookup chain used to resolve service
//! environment variables from variable-definition files, the process
//! environment, and caller-supplied tables.

pub mod config;
mod lookup;

pub use config::ServiceConfig;
pub use lookup::{
    EnvFileError, EnvironmentLookup, FileEnvLookup, FileFormat, MapEnvLookup, OsEnvLookup,
};
