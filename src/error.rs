//! Error types for exporting email lists

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting an export payload
///
/// Extraction and CSV construction are total; only the side-effecting
/// edges (sinks) can fail.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the payload failed
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target filename is empty or is not a single path component
    #[error("Invalid export filename: {0:?}")]
    InvalidFilename(String),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
