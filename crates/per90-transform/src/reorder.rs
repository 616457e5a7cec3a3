//! Step 4: target column reordering.

use per90_model::SchemaConfig;
use polars::prelude::{DataFrame, PlSmallStr};
use tracing::debug;

use crate::error::Result;

/// Move the target column to the last position.
///
/// Other columns keep their relative order. Returns the reordered frame and
/// whether the column order changed; an absent target is a no-op.
pub fn move_target_last(df: &DataFrame, schema: &SchemaConfig) -> Result<(DataFrame, bool)> {
    let Some(target) = schema.target.as_deref() else {
        return Ok((df.clone(), false));
    };
    let names = df.get_column_names_owned();
    let Some(position) = names.iter().position(|name| name.as_str() == target) else {
        debug!(target, "target column absent, order unchanged");
        return Ok((df.clone(), false));
    };
    if position + 1 == names.len() {
        return Ok((df.clone(), false));
    }

    let mut order: Vec<PlSmallStr> = names
        .into_iter()
        .filter(|name| name.as_str() != target)
        .collect();
    order.push(PlSmallStr::from(target));
    Ok((df.select(order)?, true))
}
