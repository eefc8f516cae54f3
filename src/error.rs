//! Error handling for range filtering operations.
//!
//! Only run-level failures live here. Problems with a single record are
//! never errors: they are classified as invalid and counted (see
//! [`crate::models::InvalidReason`]).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty input: no header line found")]
    EmptyInput,

    #[error("Column '{column}' not found in header")]
    MissingColumn { column: String },

    #[error("Failed to open input file: {path} - {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file: {path} - {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl FilterError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
