//! CSV header parsing and normalization.

use std::collections::BTreeSet;

/// Column names read from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    /// Builds headers from raw header cells, normalizing each name.
    pub fn from_raw<'a>(raw: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            columns: raw.into_iter().map(normalize_header).collect(),
        }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Returns a description of the first structural problem, if any.
    pub fn problem(&self) -> Option<String> {
        let mut seen = BTreeSet::new();
        for (idx, column) in self.columns.iter().enumerate() {
            if column.is_empty() {
                return Some(format!("column {} has an empty name", idx + 1));
            }
            if !seen.insert(column.as_str()) {
                return Some(format!("column '{column}' appears more than once"));
            }
        }
        None
    }
}

/// Normalizes a header value by stripping a UTF-8 BOM and surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{feff}Id"), "Id");
        assert_eq!(normalize_header("  Gls "), "Gls");
        assert_eq!(normalize_header("market_value_in_eur"), "market_value_in_eur");
    }

    #[test]
    fn test_problem_detection() {
        let headers = CsvHeaders::from_raw(["Id", "Player", "Min"]);
        assert!(headers.problem().is_none());
        assert!(headers.contains("Min"));

        let headers = CsvHeaders::from_raw(["Id", " ", "Min"]);
        assert_eq!(
            headers.problem().as_deref(),
            Some("column 2 has an empty name")
        );

        let headers = CsvHeaders::from_raw(["Gls", "Ast", "Gls"]);
        assert_eq!(
            headers.problem().as_deref(),
            Some("column 'Gls' appears more than once")
        );
    }
}
