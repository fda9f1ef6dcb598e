//! Error handling for MAWS conversion operations.
//!
//! Provides error types with context for configuration loading, record
//! parsing, metadata lookup, and NetCDF persistence failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Format error in file {path}: {reason}")]
    Format { path: PathBuf, reason: String },

    #[error("Format error in file {path}, row {row}, column '{column}': {reason}")]
    Coercion {
        path: PathBuf,
        row: usize,
        column: String,
        reason: String,
    },

    #[error("CSV error in file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No metadata entry for variable '{variable}'")]
    Lookup { variable: String },

    #[error("Failed to write artifact {path}: {reason}")]
    Persistence { path: PathBuf, reason: String },

    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),

    #[error("Structural error in dataset from {path}: {reason}")]
    Structure { path: PathBuf, reason: String },
}

impl ConvertError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a format error for a whole file
    pub fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a coercion error naming the offending cell
    pub fn coercion(
        path: impl Into<PathBuf>,
        row: usize,
        column: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Coercion {
            path: path.into(),
            row,
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create a lookup error for a variable with no catalog entry
    pub fn lookup(variable: impl Into<String>) -> Self {
        Self::Lookup {
            variable: variable.into(),
        }
    }

    /// Create a persistence error for a failed artifact write
    pub fn persistence(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Persistence {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
