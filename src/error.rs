//! Errors raised around the outline core: reading, parsing and writing documents.
//!
//! The outline pass itself cannot fail; only getting documents in and out can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure to load or store a document.
pub enum Error {
    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: io::Error,
    },
    /// A notebook file is not valid notebook JSON.
    #[error("invalid notebook: {0}")]
    Json(#[from] serde_json::Error),
    /// No format handles this file.
    #[error("{}: unsupported file type", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A path given on the command line does not exist.
    #[error("{}: no such file or directory", .0.display())]
    Missing(PathBuf),
}

/// Result alias for document I/O.
pub type Result<T> = std::result::Result<T, Error>;
