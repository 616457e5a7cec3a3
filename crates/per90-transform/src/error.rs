//! Error types for the per-90 pipeline.

use per90_model::SchemaError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that abort a normalization run.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Input does not fit the configured schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),
}

impl TransformError {
    /// Returns the schema error, if this is one.
    pub fn as_schema(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(err) => Some(err),
            Self::DataFrame(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_is_transparent() {
        let err: TransformError = SchemaError::MissingColumn {
            column: "Min".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "required column 'Min' not found");
        assert!(err.as_schema().is_some());
    }

    #[test]
    fn test_error_from_polars() {
        let err: TransformError = PolarsError::ColumnNotFound("Gls".into()).into();
        assert!(matches!(err, TransformError::DataFrame(_)));
        assert!(err.as_schema().is_none());
    }
}
