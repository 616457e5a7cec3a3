//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Cell values read as missing, in addition to empty cells.
///
/// Matches the missing-value markers common in exported stat tables so a
/// single "N/A" does not turn a numeric column into text.
pub const NULL_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads and validates the header row.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);
    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let headers = CsvHeaders::from_raw(record.iter());
    if headers.is_empty() || (headers.len() == 1 && headers.columns[0].is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if let Some(reason) = headers.problem() {
        return Err(IngestError::InvalidHeader {
            path: path.to_path_buf(),
            reason,
        });
    }
    Ok(headers)
}

/// Reads a CSV file into a Polars DataFrame.
///
/// The whole file is scanned for schema inference so a stat column with
/// sparse values late in the file is still typed as numeric. Cells matching
/// [`NULL_VALUES`] are missing, and a column with no values at all is read as
/// `Float64`. Column names are taken from the normalized header row.
pub fn read_csv_table(path: &Path) -> Result<(DataFrame, CsvHeaders)> {
    validate_encoding(path)?;
    let headers = read_csv_schema(path)?;

    let null_values: Vec<PlSmallStr> = NULL_VALUES
        .iter()
        .map(|value| PlSmallStr::from(*value))
        .collect();
    let parse_options =
        CsvParseOptions::default().with_null_values(Some(NullValues::AllColumns(null_values)));
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(parse_options)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() != headers.len() {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "header has {} columns but {} were parsed",
                headers.len(),
                df.width()
            ),
        });
    }
    let renamed = df
        .get_column_names()
        .iter()
        .zip(&headers.columns)
        .any(|(actual, expected)| actual.as_str() != expected);
    if renamed {
        df.set_column_names(headers.columns.iter().map(String::as_str))
            .map_err(|e| IngestError::CsvParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
    }

    cast_empty_columns(&mut df).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if df.height() == 0 {
        warn!(path = %path.display(), "input has a header row but no data rows");
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded input table"
    );

    Ok((df, headers))
}

/// Read columns without a single value as `Float64` instead of text.
fn cast_empty_columns(df: &mut DataFrame) -> PolarsResult<()> {
    if df.height() == 0 {
        return Ok(());
    }
    let empty: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|column| {
            matches!(column.dtype(), DataType::String | DataType::Null)
                && column.null_count() == column.len()
        })
        .map(|column| column.name().clone())
        .collect();
    for name in empty {
        let cast = df.column(&name)?.cast(&DataType::Float64)?;
        df.with_column(cast)?;
        debug!(column = %name, "empty column read as Float64");
    }
    Ok(())
}
