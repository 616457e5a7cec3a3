//! Summary of a normalization run.

use std::collections::BTreeMap;

use serde::Serialize;

/// What a run detected, created and filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Per90Report {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Stat columns normalized and dropped, in input order.
    pub stat_columns: Vec<String>,
    /// Derived columns created, in stat-column order.
    pub derived_columns: Vec<String>,
    pub identifier_columns: Vec<String>,
    pub passthrough_columns: Vec<String>,
    pub denominator: String,
    /// Target column, when present in the input.
    pub target: Option<String>,
    /// Whether moving the target changed the column order.
    pub target_moved: bool,
    /// Rows whose denominator is missing, zero or negative.
    pub unusable_denominator_rows: usize,
    /// Zero-filled cells per derived column.
    pub zero_filled: BTreeMap<String, usize>,
    /// Output column order.
    pub output_columns: Vec<String>,
}

impl Per90Report {
    /// Total number of zero-filled cells across derived columns.
    pub fn total_zero_filled(&self) -> usize {
        self.zero_filled.values().sum()
    }
}
