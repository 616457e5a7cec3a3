//! CSV output.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Default output location: `<input stem>_per90.csv` beside the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}_per90.csv"))
}

/// Write `df` to `path` as CSV with a header row.
///
/// The parent directory is created if needed. Any existing file at `path`
/// is replaced only after the new content has been fully written.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut temp = tempfile::Builder::new()
        .prefix(".per90-")
        .suffix(".csv.tmp")
        .tempfile_in(&dir)
        .map_err(io_error)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        CsvWriter::new(&mut writer)
            .include_header(true)
            .with_separator(b',')
            .finish(df)
            .map_err(|e| OutputError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        writer.flush().map_err(io_error)?;
    }

    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote output table"
    );
    Ok(())
}
