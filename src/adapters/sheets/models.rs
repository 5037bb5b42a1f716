//! Sheets API v4 wire models
//!
//! Only the fields this crate reads are modelled; unknown fields are ignored.

use crate::domain::{RawGrid, SheetInfo};
use serde::Deserialize;

/// Response of `GET spreadsheets/{id}/values/{range}`
///
/// The API omits `values` entirely when the range holds no data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub major_dimension: Option<String>,

    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    /// Converts the cell values to strings
    ///
    /// Formatted values normally arrive as strings already; numbers and
    /// booleans are rendered with their JSON text and `null` becomes `""`.
    pub fn into_grid(self) -> RawGrid {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Response of `GET spreadsheets/{id}?fields=sheets.properties`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub title: String,

    #[serde(default)]
    pub sheet_id: Option<i64>,

    #[serde(default)]
    pub grid_properties: Option<GridProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(default)]
    pub row_count: u64,

    #[serde(default)]
    pub column_count: u64,
}

impl SpreadsheetMetadata {
    /// Sheet listing in spreadsheet order
    pub fn into_sheet_infos(self) -> Vec<SheetInfo> {
        self.sheets
            .into_iter()
            .map(|entry| {
                let grid = entry.properties.grid_properties.unwrap_or_default();
                SheetInfo {
                    name: entry.properties.title,
                    row_count: grid.row_count,
                    column_count: grid.column_count,
                }
            })
            .collect()
    }
}
