//! Error types for the docrumb library.

use std::io;
use thiserror::Error;

/// Result type alias for docrumb operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or chunking documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing a document or image-reference map.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document structure is unusable (e.g. duplicate or missing ids).
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}
