//! Error types for the gitignored toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the library and the CLI binaries.
///
/// Status-query failures are deliberately absent: a failing `git status`
/// contributes zero entries instead of aborting the walk.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid porcelain version: {0} (must be 1 or 2)")]
    InvalidPorcelainVersion(u8),

    #[error("Failed to start async runtime: {0}")]
    Runtime(String),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("Conflicting values for key '{key}': {existing} != {incoming}")]
    MergeConflict {
        key: String,
        existing: String,
        incoming: String,
    },
}

impl From<config::ConfigError> for ToolError {
    fn from(err: config::ConfigError) -> Self {
        ToolError::Config(err.to_string())
    }
}
