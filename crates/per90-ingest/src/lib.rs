//! Player statistics ingestion.
//!
//! Reads one comma-separated file with a header row into a Polars
//! [`DataFrame`](polars::prelude::DataFrame). Column dtypes are inferred from
//! the data so numeric stat columns arrive as numbers.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use per90_ingest::read_csv_table;
//!
//! let (df, headers) = read_csv_table(Path::new("data/players.csv"))?;
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, NULL_VALUES, read_csv_schema, read_csv_table, validate_encoding};
