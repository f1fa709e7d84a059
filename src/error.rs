//! Error types for tagscan

use thiserror::Error;

/// Result type alias for tagscan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Scan engine error types
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tag marker must not be empty")]
    EmptyMarker,

    #[error("invalid scan pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),
}
