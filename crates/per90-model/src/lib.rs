//! Schema description and column roles for per-90 normalization.
//!
//! The normalizer never hardcodes which columns to transform. Instead a
//! [`SchemaConfig`] names the identifier columns, the denominator (minutes
//! played) and the target column, and every remaining numeric column is
//! treated as a stat column.

pub mod error;
pub mod options;
pub mod role;
pub mod schema;

pub use error::{Result, SchemaError};
pub use options::{EmptyStatPolicy, Per90Options};
pub use role::ColumnRole;
pub use schema::{
    DEFAULT_DENOMINATOR, DEFAULT_IDENTIFIER_COLUMNS, DEFAULT_TARGET, DERIVED_SUFFIX,
    MINUTES_PER_MATCH, SchemaConfig,
};
