//! Error types for dataset loading, query validation and configuration.
//!
//! Load-time errors are fatal to the server process. Query errors are
//! reported per call and never affect the loaded dataset.

use std::path::PathBuf;

use polars::prelude::PolarsError;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, DataLoadError>;

/// Error raised while loading the launch records table.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// The source file does not exist.
    #[error("Dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The source file exists but could not be read.
    #[error("Failed to read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the content or a column could not be cast.
    #[error("Malformed CSV: {0}")]
    Csv(#[from] PolarsError),

    /// A required column is absent from the header.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A cell holds a value outside its column's domain.
    #[error("Invalid value in column '{column}' at row {row}: {message}")]
    InvalidValue {
        column: String,
        row: usize,
        message: String,
    },

    /// The file extension is not a supported tabular format.
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

impl DataLoadError {
    pub(crate) fn invalid_value(column: &str, row: usize, message: impl Into<String>) -> Self {
        DataLoadError::InvalidValue {
            column: column.to_string(),
            row,
            message: message.into(),
        }
    }
}

/// Error raised when a payload range cannot be constructed.
///
/// Bounds are never swapped: an inverted range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidRangeError {
    #[error("Invalid payload range: low ({low}) is greater than high ({high})")]
    Inverted { low: f64, high: f64 },

    #[error("Invalid payload range: bounds must be numbers (low={low}, high={high})")]
    NotANumber { low: f64, high: f64 },
}

/// Error raised while reading the dashboard configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnv { name: String, value: String },
}
