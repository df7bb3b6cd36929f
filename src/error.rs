//! Errors surfaced by the command-line front end.

use std::io;
use std::path::PathBuf;

use verity_core::{ResponseError, UrlValidationError};

/// Top-level CLI error
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Input file or stdin could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output could not be written
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    /// Response document rejected or unparseable
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Source URL rejected
    #[error("invalid URL: {0}")]
    Url(#[from] UrlValidationError),

    /// JSON output could not be produced
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
