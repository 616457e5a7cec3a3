//! Step 5: zero-fill gaps in derived columns.

use std::collections::BTreeMap;

use per90_model::SchemaConfig;
use polars::prelude::{Column, DataFrame, DataType, PlSmallStr};
use tracing::debug;

use crate::error::Result;

/// Returns true if `name` is a numeric derived column that should be filled.
///
/// Identifier, denominator and target columns are never filled even if
/// their names carry the derived suffix.
fn is_fillable(df: &DataFrame, name: &str, schema: &SchemaConfig) -> bool {
    schema.is_derived(name)
        && name != schema.denominator
        && !schema.is_target(name)
        && !schema.is_identifier(name)
        && df
            .column(name)
            .is_ok_and(|column| column.dtype().is_primitive_numeric())
}

/// Replace missing or non-finite values in derived columns with `0`.
///
/// Rows are never dropped. Returns the number of cells filled per derived
/// column, including columns that needed no filling.
pub fn fill_derived_gaps(
    df: &mut DataFrame,
    schema: &SchemaConfig,
) -> Result<BTreeMap<String, usize>> {
    let frame: &DataFrame = df;
    let targets: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| is_fillable(frame, name, schema))
        .collect();

    let mut filled = BTreeMap::new();
    for name in targets {
        let values = df.column(&name)?.cast(&DataType::Float64)?;
        let mut gaps = 0usize;
        let dense: Vec<f64> = values
            .f64()?
            .into_iter()
            .map(|value| match value {
                Some(v) if v.is_finite() => v,
                _ => {
                    gaps += 1;
                    0.0
                }
            })
            .collect();
        if gaps > 0 {
            df.with_column(Column::new(PlSmallStr::from(name.as_str()), dense))?;
            debug!(column = %name, cells = gaps, "zero-filled derived column");
        }
        filled.insert(name, gaps);
    }
    Ok(filled)
}
