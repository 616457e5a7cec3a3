//! Steps 2 and 3: per-90 normalization and removal of the original stats.

use std::collections::BTreeSet;

use per90_model::{SchemaConfig, SchemaError};
use polars::prelude::{Column, DataFrame, DataType, PlSmallStr};
use tracing::{debug, warn};

use crate::classify::ColumnPlan;
use crate::error::Result;
use crate::normalization::parse_numeric;

/// Counts gathered while adding derived columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Derived column names, in stat-column order.
    pub derived_columns: Vec<String>,
    /// Rows whose denominator is missing, zero or negative.
    pub unusable_denominator_rows: usize,
    /// Subset of the unusable rows with a negative denominator.
    pub negative_denominator_rows: usize,
}

/// Per-90 rate for one cell.
///
/// Present only when both operands are present, minutes are positive and
/// the result is finite. Everything else is missing and later zero-filled.
pub fn per90_value(stat: Option<f64>, minutes: Option<f64>, scale: f64) -> Option<f64> {
    let stat = stat?;
    let minutes = minutes.filter(|m| *m > 0.0)?;
    Some(stat / minutes * scale).filter(|v| v.is_finite())
}

/// Read the denominator column as optional floats.
///
/// Numeric columns are cast; text columns are parsed leniently so values
/// such as "1,234" still divide. The column itself is not modified.
pub fn denominator_values(df: &DataFrame, schema: &SchemaConfig) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(&schema.denominator)
        .map_err(|_| SchemaError::MissingColumn {
            column: schema.denominator.clone(),
        })?;
    let dtype = column.dtype();

    if dtype.is_primitive_numeric() {
        let floats = column.cast(&DataType::Float64)?;
        Ok(floats.f64()?.into_iter().collect())
    } else if matches!(dtype, DataType::String) {
        Ok(column
            .str()?
            .into_iter()
            .map(|value| value.and_then(parse_numeric))
            .collect())
    } else if matches!(dtype, DataType::Null) {
        Ok(vec![None; column.len()])
    } else {
        Err(SchemaError::NonNumericColumn {
            column: schema.denominator.clone(),
            dtype: dtype.to_string(),
        }
        .into())
    }
}

/// Add a `<stat>_per90` column for every stat column in `plan`.
///
/// Derived columns are appended in stat-column order. A derived name that
/// already exists in the frame is rejected rather than overwritten.
pub fn normalize_per90(
    df: &mut DataFrame,
    plan: &ColumnPlan,
    schema: &SchemaConfig,
) -> Result<NormalizeSummary> {
    let minutes = denominator_values(df, schema)?;

    let mut summary = NormalizeSummary::default();
    for value in &minutes {
        match value {
            Some(m) if *m > 0.0 => {}
            Some(m) if *m < 0.0 => {
                summary.unusable_denominator_rows += 1;
                summary.negative_denominator_rows += 1;
            }
            _ => summary.unusable_denominator_rows += 1,
        }
    }
    if summary.negative_denominator_rows > 0 {
        warn!(
            column = %schema.denominator,
            rows = summary.negative_denominator_rows,
            "negative denominator values treated as missing"
        );
    }

    let existing: BTreeSet<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for stat in &plan.stat_columns {
        let derived = schema.derived_name(stat);
        if existing.contains(&derived) || summary.derived_columns.contains(&derived) {
            return Err(SchemaError::DuplicateColumn {
                column: derived,
                stat_column: stat.clone(),
            }
            .into());
        }

        let values = df.column(stat)?.cast(&DataType::Float64)?;
        let rates: Vec<Option<f64>> = values
            .f64()?
            .into_iter()
            .zip(&minutes)
            .map(|(value, minutes)| per90_value(value, *minutes, schema.scale))
            .collect();
        df.with_column(Column::new(PlSmallStr::from(derived.as_str()), rates))?;
        summary.derived_columns.push(derived);
    }

    debug!(
        derived = summary.derived_columns.len(),
        unusable_rows = summary.unusable_denominator_rows,
        "added per-90 columns"
    );
    Ok(summary)
}

/// Remove the original stat columns, keeping every other column in order.
pub fn drop_stat_columns(df: &DataFrame, plan: &ColumnPlan) -> Result<DataFrame> {
    let keep: Vec<PlSmallStr> = df
        .get_column_names_owned()
        .into_iter()
        .filter(|name| !plan.is_stat(name.as_str()))
        .collect();
    let dropped = df.width() - keep.len();
    let result = df.select(keep)?;
    debug!(dropped, "dropped original stat columns");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_columns;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn test_per90_value() {
        assert_eq!(per90_value(Some(9.0), Some(45.0), 90.0), Some(18.0));
        assert_eq!(per90_value(Some(5.0), Some(0.0), 90.0), None);
        assert_eq!(per90_value(Some(5.0), Some(-10.0), 90.0), None);
        assert_eq!(per90_value(None, Some(90.0), 90.0), None);
        assert_eq!(per90_value(Some(1.0), None, 90.0), None);
        assert_eq!(per90_value(Some(0.0), Some(30.0), 90.0), Some(0.0));
    }

    #[test]
    fn test_denominator_from_text() {
        let df = DataFrame::new(vec![
            Series::new("Min".into(), vec![Some("1,234"), Some("n/a"), None]).into(),
        ])
        .unwrap();
        let minutes = denominator_values(&df, &SchemaConfig::default()).unwrap();

        assert_eq!(minutes, vec![Some(1234.0), None, None]);
    }

    #[test]
    fn test_denominator_boolean_rejected() {
        let df = DataFrame::new(vec![Series::new("Min".into(), vec![true, false]).into()]).unwrap();
        let err = denominator_values(&df, &SchemaConfig::default()).unwrap_err();

        assert!(matches!(
            err.as_schema(),
            Some(SchemaError::NonNumericColumn { .. })
        ));
    }

    #[test]
    fn test_normalize_and_drop() {
        let mut df = DataFrame::new(vec![
            Series::new("Player".into(), vec!["A", "B", "C"]).into(),
            Series::new("Min".into(), vec![45i64, 0, -90]).into(),
            Series::new("Gls".into(), vec![Some(9i64), Some(5), None]).into(),
        ])
        .unwrap();
        let schema = SchemaConfig::default();
        let plan = classify_columns(&df, &schema).unwrap();

        let summary = normalize_per90(&mut df, &plan, &schema).unwrap();
        assert_eq!(summary.derived_columns, vec!["Gls_per90"]);
        assert_eq!(summary.unusable_denominator_rows, 2);
        assert_eq!(summary.negative_denominator_rows, 1);

        let rates = df.column("Gls_per90").unwrap().f64().unwrap();
        assert_eq!(rates.get(0), Some(18.0));
        assert_eq!(rates.get(1), None);
        assert_eq!(rates.get(2), None);

        let df = drop_stat_columns(&df, &plan).unwrap();
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Player", "Min", "Gls_per90"]);
    }

    #[test]
    fn test_duplicate_derived_name() {
        let mut df = DataFrame::new(vec![
            Series::new("Min".into(), vec![90i64]).into(),
            Series::new("Gls".into(), vec![1i64]).into(),
            Series::new("Gls_per90".into(), vec![1.0f64]).into(),
        ])
        .unwrap();
        let schema = SchemaConfig::default();
        let plan = classify_columns(&df, &schema).unwrap();
        let err = normalize_per90(&mut df, &plan, &schema).unwrap_err();

        assert_eq!(
            err.as_schema(),
            Some(&SchemaError::DuplicateColumn {
                column: "Gls_per90".to_string(),
                stat_column: "Gls".to_string(),
            })
        );
    }
}
