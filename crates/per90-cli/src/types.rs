use std::path::PathBuf;
use std::time::Duration;

use per90_transform::Per90Report;
use polars::prelude::DataFrame;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written output file; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report: Per90Report,
    /// First rows of the output table.
    pub preview: DataFrame,
    pub elapsed: Duration,
}
