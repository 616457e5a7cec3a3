//! Explicit schema description for the player statistics dataset.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemaError};
use crate::role::ColumnRole;

/// Columns describing the player or context rather than performance.
pub const DEFAULT_IDENTIFIER_COLUMNS: [&str; 12] = [
    "Id",
    "Player",
    "Nation",
    "Pos",
    "Squad",
    "Comp",
    "Age",
    "Born",
    "MP",
    "Starts",
    "Min",
    "market_value_in_eur",
];

/// Minutes played.
pub const DEFAULT_DENOMINATOR: &str = "Min";

/// Market value, placed last for downstream modeling.
pub const DEFAULT_TARGET: &str = "market_value_in_eur";

/// Suffix appended to a stat column name to form its derived column.
pub const DERIVED_SUFFIX: &str = "_per90";

pub const MINUTES_PER_MATCH: f64 = 90.0;

/// Schema used to classify dataset columns.
///
/// The stat-column set is never declared: it is whatever numeric columns
/// remain after removing the identifier columns and the denominator.
/// Column names are matched exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Columns never transformed.
    pub identifier_columns: Vec<String>,
    /// Column divided by.
    pub denominator: String,
    /// Column moved to the last position, if any.
    pub target: Option<String>,
    /// Suffix for derived column names.
    pub derived_suffix: String,
    /// Multiplier applied after division (90 minutes).
    pub scale: f64,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            identifier_columns: DEFAULT_IDENTIFIER_COLUMNS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            denominator: DEFAULT_DENOMINATOR.to_string(),
            target: Some(DEFAULT_TARGET.to_string()),
            derived_suffix: DERIVED_SUFFIX.to_string(),
            scale: MINUTES_PER_MATCH,
        }
    }
}

impl SchemaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier column (no-op if already present).
    #[must_use]
    pub fn with_identifier(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.is_identifier(&name) {
            self.identifier_columns.push(name);
        }
        self
    }

    #[must_use]
    pub fn with_denominator(mut self, name: impl Into<String>) -> Self {
        self.denominator = name.into();
        self
    }

    #[must_use]
    pub fn with_target(mut self, name: Option<String>) -> Self {
        self.target = name;
        self
    }

    pub fn is_identifier(&self, name: &str) -> bool {
        self.identifier_columns.iter().any(|column| column == name)
    }

    pub fn is_target(&self, name: &str) -> bool {
        self.target.as_deref() == Some(name)
    }

    /// Name of the derived column for a stat column.
    pub fn derived_name(&self, stat_column: &str) -> String {
        format!("{stat_column}{}", self.derived_suffix)
    }

    /// Returns true if the column name carries the derived suffix.
    pub fn is_derived(&self, name: &str) -> bool {
        name.ends_with(&self.derived_suffix)
    }

    /// Check that the schema can produce well-formed derived columns.
    ///
    /// The denominator and derived suffix must be non-empty and the scale
    /// must be a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.denominator.trim().is_empty() {
            return Err(SchemaError::InvalidSchema {
                field: "denominator",
                reason: "must not be empty".to_string(),
            });
        }
        if self.derived_suffix.is_empty() {
            return Err(SchemaError::InvalidSchema {
                field: "derived_suffix",
                reason: "must not be empty".to_string(),
            });
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SchemaError::InvalidSchema {
                field: "scale",
                reason: format!("must be positive, got {}", self.scale),
            });
        }
        Ok(())
    }

    /// Classify an input column by name and numeric-ness.
    ///
    /// Precedence: denominator, target, identifier, then numeric columns are
    /// stats and everything else passes through.
    pub fn role_of(&self, name: &str, is_numeric: bool) -> ColumnRole {
        if name == self.denominator {
            ColumnRole::Denominator
        } else if self.is_target(name) {
            ColumnRole::Target
        } else if self.is_identifier(name) {
            ColumnRole::Identifier
        } else if is_numeric {
            ColumnRole::Stat
        } else {
            ColumnRole::Passthrough
        }
    }
}
