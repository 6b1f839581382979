//! CLI error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Registry rejected an input segment.
    #[error("registry error: {0}")]
    Registry(#[from] bikelane_core::RegistryError),

    /// Input file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input or output JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
