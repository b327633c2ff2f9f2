//! Error types for the pager.
//!
//! Query parsing never fails; malformed values degrade to defaults. Errors
//! only exist at the edges: loading configuration and talking to the
//! count collaborator.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
}

/// Why a count fetch did not produce a total.
///
/// Every variant is treated by the pager as "total unknown".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("count request timed out after {0:?}")]
    Timeout(Duration),
    #[error("count source failed: {0}")]
    Source(String),
}
