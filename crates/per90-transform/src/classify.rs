//! Step 1: column classification.

use per90_model::{ColumnRole, SchemaConfig, SchemaError};
use polars::prelude::{DataFrame, DataType};
use tracing::{debug, trace};

use crate::error::Result;

/// Role assignment for every input column.
///
/// Each list preserves the dataset's column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Every input column with its role, in input order.
    pub roles: Vec<(String, ColumnRole)>,
    /// Numeric columns to normalize and drop.
    pub stat_columns: Vec<String>,
    pub identifier_columns: Vec<String>,
    pub passthrough_columns: Vec<String>,
    pub denominator: String,
    /// Target column, when present in the input.
    pub target: Option<String>,
}

impl ColumnPlan {
    pub fn role_of(&self, column: &str) -> Option<ColumnRole> {
        self.roles
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, role)| *role)
    }

    pub fn is_stat(&self, column: &str) -> bool {
        self.role_of(column) == Some(ColumnRole::Stat)
    }
}

/// Classify the columns of `df` against `schema`.
///
/// Stat columns are the numeric columns that are neither identifiers nor the
/// denominator. A column with no values at all (`Null` dtype) counts as
/// numeric, so an empty stat column still gets a zero-filled derived column.
/// Fails when the denominator column is absent.
pub fn classify_columns(df: &DataFrame, schema: &SchemaConfig) -> Result<ColumnPlan> {
    let mut plan = ColumnPlan {
        roles: Vec::with_capacity(df.width()),
        stat_columns: Vec::new(),
        identifier_columns: Vec::new(),
        passthrough_columns: Vec::new(),
        denominator: schema.denominator.clone(),
        target: None,
    };
    let mut has_denominator = false;

    for column in df.get_columns() {
        let name = column.name().to_string();
        let dtype = column.dtype();
        let is_numeric = dtype.is_primitive_numeric() || matches!(dtype, DataType::Null);
        let role = schema.role_of(&name, is_numeric);
        trace!(column = %name, %role, "classified column");
        match role {
            ColumnRole::Stat => plan.stat_columns.push(name.clone()),
            ColumnRole::Identifier => plan.identifier_columns.push(name.clone()),
            ColumnRole::Passthrough => plan.passthrough_columns.push(name.clone()),
            ColumnRole::Denominator => has_denominator = true,
            ColumnRole::Target => plan.target = Some(name.clone()),
        }
        plan.roles.push((name, role));
    }

    if !has_denominator {
        return Err(SchemaError::MissingColumn {
            column: schema.denominator.clone(),
        }
        .into());
    }

    debug!(
        stats = plan.stat_columns.len(),
        identifiers = plan.identifier_columns.len(),
        passthrough = plan.passthrough_columns.len(),
        target = plan.target.is_some(),
        "classified columns"
    );
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn players() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Id".into(), vec![1i64, 2]).into(),
            Series::new("Player".into(), vec!["A", "B"]).into(),
            Series::new("Min".into(), vec![90i64, 45]).into(),
            Series::new("Gls".into(), vec![1i64, 0]).into(),
            Series::new("Notes".into(), vec!["x", "y"]).into(),
            Series::new("xG".into(), vec![0.5f64, 0.1]).into(),
            Series::new("market_value_in_eur".into(), vec![1_000_000i64, 500_000]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn test_classify_players() {
        let plan = classify_columns(&players(), &SchemaConfig::default()).unwrap();

        assert_eq!(plan.stat_columns, vec!["Gls", "xG"]);
        assert_eq!(plan.identifier_columns, vec!["Id", "Player"]);
        assert_eq!(plan.passthrough_columns, vec!["Notes"]);
        assert_eq!(plan.target.as_deref(), Some("market_value_in_eur"));
        assert_eq!(plan.roles.len(), 7);
        assert!(plan.is_stat("Gls"));
        assert_eq!(plan.role_of("Min"), Some(ColumnRole::Denominator));
    }

    #[test]
    fn test_missing_denominator() {
        let df = players().drop("Min").unwrap();
        let err = classify_columns(&df, &SchemaConfig::default()).unwrap_err();

        assert_eq!(
            err.as_schema(),
            Some(&SchemaError::MissingColumn {
                column: "Min".to_string()
            })
        );
    }

    #[test]
    fn test_null_column_is_stat() {
        let df = DataFrame::new(vec![
            Series::new("Min".into(), vec![90i64, 45]).into(),
            Series::new_null("Ast".into(), 2).into(),
        ])
        .unwrap();
        let plan = classify_columns(&df, &SchemaConfig::default()).unwrap();

        assert_eq!(plan.stat_columns, vec!["Ast"]);
        assert!(plan.passthrough_columns.is_empty());
    }

    #[test]
    fn test_target_absent() {
        let df = players().drop("market_value_in_eur").unwrap();
        let plan = classify_columns(&df, &SchemaConfig::default()).unwrap();

        assert!(plan.target.is_none());
    }
}
