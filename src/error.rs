//! Unified error handling for the analysis pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, configuring, or analyzing tracks.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse GPX {path}: {message}")]
    GpxParse { path: PathBuf, message: String },

    #[error("speed limit must be positive and finite, got {0} km/h")]
    InvalidSpeedLimit(f64),

    #[error("invalid zone bounds: {0}")]
    InvalidBounds(String),

    #[error("no tracks to summarize")]
    EmptyRun,

    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AnalysisError>;
