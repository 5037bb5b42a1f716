//! Grid normalization
//!
//! Turns the raw rows of a range read into a [`Table`]:
//!
//! 1. An empty grid yields an empty table (no data, not an error).
//! 2. Row 0 is the header; each header cell is trimmed. When two headers are
//!    equal after trimming, the later column wins and the earlier is dropped.
//! 3. Short rows are right-padded with empty strings to the header width;
//!    cells past the header width are discarded.
//! 4. Rows whose padded cells are all empty are dropped.
//! 5. Required columns absent from the header are reported, not rejected.

use crate::domain::{RawGrid, Table};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Normalized table plus the required columns it lacks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedTable {
    pub table: Table,
    pub missing_columns: BTreeSet<String>,
}

impl NormalizedTable {
    /// True when the source grid had no rows at all
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn has_missing_columns(&self) -> bool {
        !self.missing_columns.is_empty()
    }
}

/// Normalizes `grid` and checks it against `required_columns`
///
/// # Example
///
/// ```
/// use sheetdash::core::normalize::normalize;
/// use std::collections::BTreeSet;
///
/// let grid = vec![
///     vec!["COHORT".to_string(), " USERS ".to_string()],
///     vec!["2024-01".to_string(), "1000".to_string()],
///     vec!["".to_string()],
/// ];
/// let required: BTreeSet<String> = ["COHORT", "RETENTION_D1"].iter().map(|s| s.to_string()).collect();
///
/// let normalized = normalize(&grid, &required);
/// assert_eq!(normalized.table.columns(), ["COHORT", "USERS"]);
/// assert_eq!(normalized.table.row_count(), 1);
/// assert!(normalized.missing_columns.contains("RETENTION_D1"));
/// ```
pub fn normalize(grid: &RawGrid, required_columns: &BTreeSet<String>) -> NormalizedTable {
    let Some((header, data)) = grid.split_first() else {
        tracing::debug!("Range returned no data");
        return NormalizedTable {
            table: Table::empty(),
            missing_columns: BTreeSet::new(),
        };
    };

    let width = header.len();
    let kept = surviving_columns(header);
    let columns: Vec<String> = kept.iter().map(|&i| header[i].trim().to_string()).collect();

    if kept.len() < width {
        tracing::warn!(
            dropped = width - kept.len(),
            "Duplicate header names after trimming; keeping the rightmost occurrence"
        );
    }

    let rows: Vec<Vec<String>> = data
        .iter()
        .filter(|row| row.iter().take(width).any(|cell| !cell.is_empty()))
        .map(|row| {
            kept.iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    let missing_columns: BTreeSet<String> = required_columns
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .cloned()
        .collect();

    if !missing_columns.is_empty() {
        tracing::warn!(
            missing = ?missing_columns,
            "Required columns missing from sheet"
        );
    }

    tracing::debug!(
        rows = rows.len(),
        columns = columns.len(),
        dropped_rows = data.len() - rows.len(),
        "Grid normalized"
    );

    NormalizedTable {
        table: Table::from_parts(columns, rows),
        missing_columns,
    }
}

/// Header positions that survive collision resolution, left to right
fn surviving_columns(header: &[String]) -> Vec<usize> {
    let mut seen = HashSet::with_capacity(header.len());
    let mut kept: Vec<usize> = header
        .iter()
        .enumerate()
        .rev()
        .filter(|&(_, name)| seen.insert(name.trim()))
        .map(|(i, _)| i)
        .collect();
    kept.reverse();
    kept
}
