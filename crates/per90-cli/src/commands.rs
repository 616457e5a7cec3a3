use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use per90_ingest::read_csv_table;
use per90_model::{EmptyStatPolicy, Per90Options, SchemaConfig};
use per90_output::{default_output_path, write_csv};
use per90_transform::{Per90Output, Per90Pipeline};
use tracing::{debug, info, info_span};

use crate::cli::RunArgs;
use crate::types::RunResult;

/// Print the default schema as pretty JSON.
pub fn run_schema() -> Result<()> {
    let json = serde_json::to_string_pretty(&SchemaConfig::default())
        .context("serialize default schema")?;
    println!("{json}");
    Ok(())
}

/// Load, normalize and write one table.
///
/// Nothing is written unless every stage before the write succeeds.
pub fn run_normalize(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", input = %args.input.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let schema = build_schema(args)?;
    let options = build_options(args);

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let (df, headers) = info_span!("ingest").in_scope(|| {
        read_csv_table(&args.input)
            .with_context(|| format!("read input {}", args.input.display()))
    })?;
    debug!(columns = headers.len(), rows = df.height(), "input loaded");

    // =========================================================================
    // Stage 2: Normalize
    // =========================================================================
    let Per90Output { mut frame, report } = Per90Pipeline::new(schema)
        .with_options(options)
        .run(df)
        .with_context(|| format!("normalize {}", args.input.display()))?;

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let output = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        info_span!("output", path = %path.display()).in_scope(|| {
            write_csv(&mut frame, &path)
                .with_context(|| format!("write output {}", path.display()))
        })?;
        info!(path = %path.display(), rows = frame.height(), "output written");
        Some(path)
    };

    let preview = frame.head(Some(args.preview));
    Ok(RunResult {
        input: args.input.clone(),
        output,
        report,
        preview,
        elapsed: start.elapsed(),
    })
}

/// Resolve the schema: JSON file (or the default), then CLI overrides.
pub fn build_schema(args: &RunArgs) -> Result<SchemaConfig> {
    let mut schema = match &args.schema {
        Some(path) => load_schema(path)?,
        None => SchemaConfig::default(),
    };
    if let Some(denominator) = &args.denominator {
        schema = schema.with_denominator(denominator.clone());
    }
    if args.no_target {
        schema = schema.with_target(None);
    } else if let Some(target) = &args.target {
        schema = schema.with_target(Some(target.clone()));
    }
    for identifier in &args.identifiers {
        schema = schema.with_identifier(identifier.clone());
    }
    schema.validate().context("invalid schema")?;
    Ok(schema)
}

fn build_options(args: &RunArgs) -> Per90Options {
    let policy = if args.allow_no_stats {
        EmptyStatPolicy::PassThrough
    } else {
        EmptyStatPolicy::Fail
    };
    Per90Options::new().with_empty_stats(policy)
}

fn load_schema(path: &Path) -> Result<SchemaConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read schema {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse schema {}", path.display()))
}
