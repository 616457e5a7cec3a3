//! Options controlling degenerate-input behavior.

use serde::{Deserialize, Serialize};

/// What to do when the input has no stat columns to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyStatPolicy {
    /// Abort with [`crate::SchemaError::NoStatColumns`].
    #[default]
    Fail,
    /// Log a warning and emit the dataset with only the reordering applied.
    PassThrough,
}

/// Options for a normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Per90Options {
    pub empty_stats: EmptyStatPolicy,
}

impl Per90Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_empty_stats(mut self, policy: EmptyStatPolicy) -> Self {
        self.empty_stats = policy;
        self
    }
}
