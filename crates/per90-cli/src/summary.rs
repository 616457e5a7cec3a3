use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use per90_transform::Per90Report;

use crate::types::RunResult;

/// Print the run summary, the preview table and a completion line.
pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    println!("{}", summary_table(&result.report));
    if result.preview.width() > 0 && result.preview.height() > 0 {
        println!();
        println!("Preview ({} rows):", result.preview.height());
        println!("{}", preview_table(&result.preview));
    }
    println!(
        "Done in {:.2}s: {} rows, {} per-90 columns.",
        result.elapsed.as_secs_f64(),
        result.report.output_rows,
        result.report.derived_columns.len()
    );
}

/// One line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub role: &'static str,
    pub count: usize,
    pub detail: String,
}

impl SummaryRow {
    fn new(role: &'static str, count: usize, detail: impl Into<String>) -> Self {
        Self {
            role,
            count,
            detail: detail.into(),
        }
    }

    fn columns(role: &'static str, columns: &[String]) -> Self {
        let detail = if columns.is_empty() {
            "-".to_string()
        } else {
            columns.join(", ")
        };
        Self::new(role, columns.len(), detail)
    }
}

/// Summary lines for one run: column roles, row counts and filled cells.
pub fn summary_rows(report: &Per90Report) -> Vec<SummaryRow> {
    let target = match &report.target {
        Some(name) if report.target_moved => format!("{name} (moved last)"),
        Some(name) => name.clone(),
        None => "-".to_string(),
    };
    vec![
        SummaryRow::columns("identifier", &report.identifier_columns),
        SummaryRow::columns("passthrough", &report.passthrough_columns),
        SummaryRow::new("denominator", 1, report.denominator.as_str()),
        SummaryRow::columns("stat (dropped)", &report.stat_columns),
        SummaryRow::columns("derived", &report.derived_columns),
        SummaryRow::new("target", usize::from(report.target.is_some()), target),
        SummaryRow::new(
            "rows",
            report.output_rows,
            format!("{} in", report.input_rows),
        ),
        SummaryRow::new(
            "zero-filled cells",
            report.total_zero_filled(),
            format!(
                "{} rows with unusable {}",
                report.unusable_denominator_rows, report.denominator
            ),
        ),
    ]
}

/// Column roles and counts for one run.
pub fn summary_table(report: &Per90Report) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Count"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for row in summary_rows(report) {
        let cells = match row.role {
            "derived" => vec![
                Cell::new(row.role).fg(Color::Green),
                Cell::new(row.count).fg(Color::Green),
                detail_cell(row.detail),
            ],
            "rows" => vec![
                Cell::new(row.role).add_attribute(Attribute::Bold),
                Cell::new(row.count).add_attribute(Attribute::Bold),
                dim_cell(row.detail),
            ],
            "zero-filled cells" => vec![
                Cell::new(row.role),
                count_cell(row.count, Color::Yellow),
                dim_cell(row.detail),
            ],
            _ => vec![
                Cell::new(row.role),
                Cell::new(row.count),
                detail_cell(row.detail),
            ],
        };
        table.add_row(cells);
    }
    table
}

/// First rows of the output table.
pub fn preview_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for idx in 0..df.height() {
        let row: Vec<Cell> = df
            .get_columns()
            .iter()
            .map(|column| Cell::new(format_cell(column.get(idx).unwrap_or(AnyValue::Null))))
            .collect();
        table.add_row(row);
    }
    table
}

/// Render a cell value; missing values render as an empty string.
pub fn format_cell(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float with at most four decimals and no trailing zeros.
fn format_numeric(v: f64) -> String {
    let s = format!("{v:.4}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn detail_cell(detail: String) -> Cell {
    if detail == "-" {
        dim_cell(detail)
    } else {
        Cell::new(detail)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
