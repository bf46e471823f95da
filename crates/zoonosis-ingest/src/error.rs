//! Error types for notification file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a notification file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File not found.
    #[error("notification file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// The file has no header row.
    #[error("{source_name} is empty")]
    EmptyFile { source_name: String },

    /// A column the loader depends on is absent from the header.
    #[error("required column '{column}' not found in {source_name}")]
    MissingColumn {
        column: &'static str,
        source_name: String,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingColumn {
            column: "semana",
            source_name: "casos.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "required column 'semana' not found in casos.csv"
        );
    }
}
