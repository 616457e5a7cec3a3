//! The per-90 pipeline: one entry point composing the five steps.

use per90_model::{EmptyStatPolicy, Per90Options, SchemaConfig, SchemaError};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use crate::classify::classify_columns;
use crate::error::Result;
use crate::fill::fill_derived_gaps;
use crate::per90::{drop_stat_columns, normalize_per90};
use crate::reorder::move_target_last;
use crate::report::Per90Report;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Per90Output {
    /// Transformed dataset.
    pub frame: DataFrame,
    pub report: Per90Report,
}

/// Per-90 normalizer configured with a schema and options.
#[derive(Debug, Clone, Default)]
pub struct Per90Pipeline {
    schema: SchemaConfig,
    options: Per90Options,
}

impl Per90Pipeline {
    pub fn new(schema: SchemaConfig) -> Self {
        Self {
            schema,
            options: Per90Options::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Per90Options) -> Self {
        self.options = options;
        self
    }

    /// Run classify, normalize, drop, reorder and fill in that order.
    ///
    /// # Errors
    ///
    /// Returns a schema error when the schema itself is invalid, when the
    /// denominator is missing or not
    /// numeric, when a derived name collides with an existing column, or
    /// when there are no stat columns and the policy is
    /// [`EmptyStatPolicy::Fail`].
    pub fn run(&self, mut df: DataFrame) -> Result<Per90Output> {
        let span = info_span!("per90", rows = df.height(), columns = df.width());
        let _guard = span.enter();
        let input_rows = df.height();

        self.schema.validate()?;
        let plan = classify_columns(&df, &self.schema)?;
        if plan.stat_columns.is_empty() {
            match self.options.empty_stats {
                EmptyStatPolicy::Fail => {
                    return Err(SchemaError::NoStatColumns {
                        identifier_count: self.schema.identifier_columns.len(),
                    }
                    .into());
                }
                EmptyStatPolicy::PassThrough => {
                    warn!("no stat columns to normalize, passing dataset through");
                }
            }
        }

        let normalized = normalize_per90(&mut df, &plan, &self.schema)?;
        let df = drop_stat_columns(&df, &plan)?;
        let (mut df, target_moved) = move_target_last(&df, &self.schema)?;
        let zero_filled = fill_derived_gaps(&mut df, &self.schema)?;

        let report = Per90Report {
            input_rows,
            output_rows: df.height(),
            stat_columns: plan.stat_columns,
            derived_columns: normalized.derived_columns,
            identifier_columns: plan.identifier_columns,
            passthrough_columns: plan.passthrough_columns,
            denominator: plan.denominator,
            target: plan.target,
            target_moved,
            unusable_denominator_rows: normalized.unusable_denominator_rows,
            zero_filled,
            output_columns: df
                .get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        };
        info!(
            rows = report.output_rows,
            stats = report.stat_columns.len(),
            zero_filled = report.total_zero_filled(),
            "per-90 normalization complete"
        );
        Ok(Per90Output { frame: df, report })
    }
}
