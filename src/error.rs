//! Errors for the recoverable failure paths of a scan.
//!
//! Fatal errors (unreadable source directory, unwritable reports) travel as
//! `anyhow::Error`; the types here are matched on by callers that skip the
//! failing module and keep going.

use std::path::PathBuf;
use thiserror::Error;

/// A module file that could not be loaded as metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed metadata in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported metadata format version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u32 },
}

/// A forwarded type reference that could not be resolved
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("Module {module} defining forwarded type {type_name} was not found at {path}")]
    ModuleNotFound {
        module: String,
        type_name: String,
        path: PathBuf,
    },

    #[error("Module {module} defining forwarded type {type_name} failed to load: {source}")]
    ModuleUnloadable {
        module: String,
        type_name: String,
        #[source]
        source: MetadataError,
    },

    #[error("Forwarded type {type_name} is not defined in module {module}")]
    TypeNotFound { module: String, type_name: String },

    #[error("Forwarding chain for {type_name} exceeds {depth} hops")]
    ChainTooDeep { type_name: String, depth: usize },
}
