//! Tabular data types
//!
//! A [`RawGrid`] is what the Sheets API hands back: rows of cell strings, first
//! row the header, possibly ragged. A [`Table`] is the normalized form with
//! unique column names and rows padded to the full width.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Rows of cell strings as returned by the remote
pub type RawGrid = Vec<Vec<String>>;

/// Normalized table with named columns
///
/// Invariants: column names are unique and every row holds exactly one value
/// per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Table without columns or rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table, checking the invariants
    ///
    /// # Errors
    ///
    /// Returns an error if a column name repeats or a row width differs from
    /// the number of columns.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(format!("Duplicate column name: '{column}'"));
            }
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(format!(
                "Row {index} has {} values, expected {}",
                row.len(),
                columns.len()
            ));
        }

        Ok(Self { columns, rows })
    }

    // Callers guarantee the invariants (the normalizer builds rows to width).
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no columns (nothing was fetched)
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether a column with this exact name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Position of a column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates rows as name-addressable views
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Row at `index`
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Values of one column, top to bottom
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_str()))
    }

    /// Keeps only the first `limit` rows
    pub fn truncated(&self, limit: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(limit).cloned().collect(),
        }
    }

    /// Converts back into a grid: header row followed by the data rows
    pub fn to_grid(&self) -> RawGrid {
        if self.columns.is_empty() {
            return Vec::new();
        }
        let mut grid = Vec::with_capacity(self.rows.len() + 1);
        grid.push(self.columns.clone());
        grid.extend(self.rows.iter().cloned());
        grid
    }
}

/// Borrowed view of one table row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Value under `column`, or `None` if the table has no such column
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i].as_str())
    }

    /// Values in column order
    pub fn values(&self) -> &'a [String] {
        self.values
    }

    /// (column, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let values = self.values;
        self.columns
            .iter()
            .zip(values.iter())
            .map(|(c, v)| (c.as_str(), v.as_str()))
    }
}
