//! Error types for the designer crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while exporting a pattern.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the document failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// There is nothing to draw.
    #[error("Pattern has no shapes to export")]
    EmptyPattern,

    /// The fixed page has no usable size.
    #[error("Invalid page size {width} x {height}")]
    InvalidPage { width: f64, height: f64 },
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
