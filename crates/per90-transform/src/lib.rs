//! Per-90 normalization of player statistics.
//!
//! Converts cumulative stat columns into rates per 90 minutes played so
//! players with different playing time can be compared.
//!
//! # Overview
//!
//! The pipeline runs five steps in a fixed order, each exposed as its own
//! function:
//!
//! 1. [`classify_columns`]: split columns into identifiers, denominator,
//!    target, passthrough and stat columns
//! 2. [`normalize_per90`]: add `<stat>_per90 = stat / Min * 90`
//! 3. [`drop_stat_columns`]: remove the original stat columns
//! 4. [`move_target_last`]: move the target column to the end
//! 5. [`fill_derived_gaps`]: replace missing derived values with `0`
//!
//! # Example
//!
//! ```ignore
//! use per90_model::SchemaConfig;
//! use per90_transform::Per90Pipeline;
//!
//! let pipeline = Per90Pipeline::new(SchemaConfig::default());
//! let output = pipeline.run(df)?;
//! println!("{} derived columns", output.report.derived_columns.len());
//! ```

mod classify;
mod error;
mod fill;
mod per90;
mod pipeline;
mod reorder;
mod report;

pub mod normalization;

pub use classify::{ColumnPlan, classify_columns};
pub use error::{Result, TransformError};
pub use fill::fill_derived_gaps;
pub use per90::{
    NormalizeSummary, denominator_values, drop_stat_columns, normalize_per90, per90_value,
};
pub use pipeline::{Per90Output, Per90Pipeline};
pub use reorder::move_target_last;
pub use report::Per90Report;
