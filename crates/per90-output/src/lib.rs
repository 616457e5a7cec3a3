//! Output generation for normalized player statistics.
//!
//! The result table is written as comma-separated text with a header row and
//! no row-index column. Writes go to a temporary file in the destination
//! directory and are renamed into place once complete, so a failed write
//! never leaves a partial output file.

mod csv;
mod error;

pub use csv::{default_output_path, write_csv};
pub use error::{OutputError, Result};
