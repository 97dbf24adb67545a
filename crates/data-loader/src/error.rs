//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading the phone and user collections.
///
/// All of these are fatal at startup: the system cannot operate without its
/// catalogs, so callers propagate them rather than recover.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File contents are not a valid JSON array of records
    #[error("Malformed data in {file}: {source}")]
    MalformedData {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
