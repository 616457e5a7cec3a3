//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the output table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to create the destination directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the temporary output file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the DataFrame as CSV.
    #[error("failed to encode CSV for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Failed to move the completed file into place.
    #[error("failed to persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::Encode {
            path: PathBuf::from("out/VA_per90.csv"),
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to encode CSV for out/VA_per90.csv: boom"
        );
    }
}
