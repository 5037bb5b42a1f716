//! Derived table metrics
//!
//! Data quality counts and simple numeric summaries shown next to a table.

use crate::domain::Table;
use serde::Serialize;

/// Size and completeness of a table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub rows: usize,
    pub columns: usize,
    pub empty_cells: usize,
    /// Empty cells over all cells, in `[0, 1]`; 0 for a table without cells
    pub missing_ratio: f64,
}

impl QualityReport {
    pub fn missing_percentage(&self) -> f64 {
        self.missing_ratio * 100.0
    }
}

/// Counts rows, columns and empty cells
///
/// A cell holding only whitespace counts as empty.
pub fn quality_report(table: &Table) -> QualityReport {
    let rows = table.row_count();
    let columns = table.column_count();
    let empty_cells = table
        .rows()
        .flat_map(|row| row.values().iter())
        .filter(|cell| cell.trim().is_empty())
        .count();

    let total = rows * columns;
    let missing_ratio = if total == 0 {
        0.0
    } else {
        empty_cells as f64 / total as f64
    };

    QualityReport {
        rows,
        columns,
        empty_cells,
        missing_ratio,
    }
}

/// Numeric summary of one column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    pub numeric_count: usize,
    pub non_numeric_count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summarizes the numeric cells of `column`
///
/// Empty cells are skipped; anything else that does not parse counts as
/// non-numeric. Returns `None` if the column does not exist.
pub fn column_stats(table: &Table, column: &str) -> Option<ColumnStats> {
    let values = table.column_values(column)?;

    let mut stats = ColumnStats {
        column: column.to_string(),
        numeric_count: 0,
        non_numeric_count: 0,
        sum: 0.0,
        mean: None,
        min: None,
        max: None,
    };

    for cell in values {
        if cell.trim().is_empty() {
            continue;
        }
        match parse_number(cell) {
            Some(n) => {
                stats.numeric_count += 1;
                stats.sum += n;
                stats.min = Some(stats.min.map_or(n, |m| m.min(n)));
                stats.max = Some(stats.max.map_or(n, |m| m.max(n)));
            }
            None => stats.non_numeric_count += 1,
        }
    }

    if stats.numeric_count > 0 {
        stats.mean = Some(stats.sum / stats.numeric_count as f64);
    }

    Some(stats)
}

/// Stats for every column holding at least one number and nothing else
pub fn numeric_summary(table: &Table) -> Vec<ColumnStats> {
    table
        .columns()
        .iter()
        .filter_map(|column| column_stats(table, column))
        .filter(|stats| stats.numeric_count > 0 && stats.non_numeric_count == 0)
        .collect()
}

/// Parses a spreadsheet-formatted number
///
/// Accepts surrounding whitespace, a leading `R$` or `$`, a trailing `%`,
/// and `,` thousands separators. A percentage keeps its face value, so
/// `"45%"` is `45.0`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let mut s = raw.trim();
    let negative = s.starts_with('-');
    if negative {
        s = s[1..].trim_start();
    }

    s = s
        .strip_prefix("R$")
        .or_else(|| s.strip_prefix('$'))
        .unwrap_or(s)
        .trim();
    s = s.strip_suffix('%').unwrap_or(s).trim_end();

    if s.is_empty() {
        return None;
    }

    let cleaned: String = s.chars().filter(|&c| c != ',').collect();
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// `part / whole * 100`, or `None` when `whole` is zero
pub fn percentage(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part / whole * 100.0)
    }
}

/// Formats an amount with thousands separators and two decimals
///
/// ```
/// use sheetdash::core::metrics::format_amount;
///
/// assert_eq!(format_amount(1234567.891), "1,234,567.89");
/// assert_eq!(format_amount(-42.0), "-42.00");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn table() -> Table {
        Table::new(
            vec!["COHORT".into(), "USERS".into(), "REVENUE".into()],
            vec![
                vec!["2024-01".into(), "1,000".into(), "R$ 150.50".into()],
                vec!["2024-02".into(), "".into(), "$49.50".into()],
                vec!["2024-03".into(), "500".into(), "n/a".into()],
            ],
        )
        .unwrap()
    }

    #[test_case("42", Some(42.0) ; "integer")]
    #[test_case(" 3.5 ", Some(3.5) ; "padded decimal")]
    #[test_case("1,234.5", Some(1234.5) ; "thousands separator")]
    #[test_case("R$ 1,000.00", Some(1000.0) ; "reais")]
    #[test_case("$99", Some(99.0) ; "dollars")]
    #[test_case("45%", Some(45.0) ; "percentage")]
    #[test_case("-12.5", Some(-12.5) ; "negative")]
    #[test_case("- R$ 3", Some(-3.0) ; "negative currency")]
    #[test_case("", None ; "empty")]
    #[test_case("abc", None ; "text")]
    #[test_case("R$", None ; "symbol only")]
    #[test_case("inf", None ; "infinity")]
    fn test_parse_number(input: &str, expected: Option<f64>) {
        assert_eq!(parse_number(input), expected);
    }

    #[test]
    fn test_quality_report() {
        let report = quality_report(&table());
        assert_eq!(report.rows, 3);
        assert_eq!(report.columns, 3);
        assert_eq!(report.empty_cells, 1);
        assert!((report.missing_percentage() - 100.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_quality_report_empty_table() {
        let report = quality_report(&Table::empty());
        assert_eq!(report.missing_ratio, 0.0);
    }

    #[test]
    fn test_column_stats() {
        let stats = column_stats(&table(), "REVENUE").unwrap();
        assert_eq!(stats.numeric_count, 2);
        assert_eq!(stats.non_numeric_count, 1);
        assert!((stats.sum - 200.0).abs() < 1e-9);
        assert_eq!(stats.mean, Some(100.0));
        assert_eq!(stats.min, Some(49.5));
        assert_eq!(stats.max, Some(150.5));

        let users = column_stats(&table(), "USERS").unwrap();
        assert_eq!(users.numeric_count, 2);
        assert_eq!(users.non_numeric_count, 0);

        assert!(column_stats(&table(), "ARPU").is_none());
    }

    #[test]
    fn test_numeric_summary_skips_mixed_columns() {
        let summary = numeric_summary(&table());
        let names: Vec<&str> = summary.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(names, vec!["USERS"]);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(25.0, 200.0), Some(12.5));
        assert_eq!(percentage(1.0, 0.0), None);
    }

    #[test_case(0.0, "0.00")]
    #[test_case(999.999, "1,000.00")]
    #[test_case(1234.5, "1,234.50")]
    #[test_case(-0.001, "0.00")]
    fn test_format_amount(value: f64, expected: &str) {
        assert_eq!(format_amount(value), expected);
    }
}
