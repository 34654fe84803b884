//! Error types for resumekit library.

use std::io;
use thiserror::Error;

/// Result type alias for resumekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while importing, building or exporting templates.
///
/// Parsing and generation are lenient by default, so most of these only
/// surface from strict parsing, JSON import, or the external collaborators.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Uploaded content is neither usable HTML nor valid JSON.
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Uploaded file has an extension that is not accepted.
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    /// Strict parsing found no resume container in the document.
    #[error("No resume container found (expected .resume-container or .sidebar + .main-content)")]
    MissingContainer,

    /// The template has no name and cannot be persisted.
    #[error("Template name is required")]
    MissingTemplateName,

    /// Two elements share the same id.
    #[error("Duplicate element id: {0}")]
    DuplicateElementId(String),

    /// The template store rejected a read or write.
    #[error("Template store error: {0}")]
    Store(String),

    /// Thumbnail rasterization failed.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// Document export failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
