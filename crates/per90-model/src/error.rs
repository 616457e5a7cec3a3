//! Schema errors raised before any output is produced.

use thiserror::Error;

/// Errors caused by an input that does not fit the configured schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required column (the denominator) is absent.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// No numeric column is left to normalize once identifiers are excluded.
    #[error("no numeric stat columns found outside the {identifier_count} identifier columns")]
    NoStatColumns { identifier_count: usize },

    /// A derived column name collides with a column already in the dataset.
    #[error("derived column '{column}' for stat '{stat_column}' already exists")]
    DuplicateColumn { column: String, stat_column: String },

    /// The denominator column has a type that cannot be divided by.
    #[error("column '{column}' has non-numeric type {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// The schema itself is unusable.
    #[error("invalid schema field '{field}': {reason}")]
    InvalidSchema { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
