//! Error types for loading a dataset

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset
///
/// A failed load never touches the store's existing data.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Remote document could not be fetched
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote document answered with a non-success status
    #[error("HTTP error! status: {status} ({url})")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Document is not well-formed JSON of the expected shape
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Source description could not be understood
    #[error("Invalid data source: {0}")]
    InvalidSource(String),
}
