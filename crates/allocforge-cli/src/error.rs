//! Error types for the CLI

use std::path::PathBuf;

use allocforge_config::ConfigError;
use allocforge_core::AllocForgeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Allocation(#[from] AllocForgeError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("missing --capacity (or --input FILE)")]
    MissingCapacity,

    #[error("{failed} of {total} requests failed")]
    BatchFailures { failed: usize, total: usize },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
