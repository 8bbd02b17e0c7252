//! Error types for the rebuild run.
//!
//! Only conditions that end the run live here. Unreadable sidecars, failed
//! stats and malformed field values are absorbed where they occur.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RebuildError {
    #[error("notebook root is not a directory: {}", path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error("Failed to serialize sidecar: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for RebuildError {
    fn from(err: config::ConfigError) -> Self {
        RebuildError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RebuildError>;
