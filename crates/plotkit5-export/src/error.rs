//! Error handling for emitters.

use thiserror::Error;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing an emitted document to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
