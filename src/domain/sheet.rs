//! Sheet addressing and per-sheet metadata
//!
//! [`SheetCoordinates`] identifies one A1 range in the spreadsheet,
//! [`SheetConfig`] carries the static metadata configured for a known sheet,
//! and [`SheetInfo`] is what the remote reports about a sheet's grid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Default icon for sheets without configured metadata
pub const DEFAULT_SHEET_ICON: &str = "📊";

/// Location of one cell range in the spreadsheet
///
/// Built per fetch request and never mutated.
///
/// # Examples
///
/// ```
/// use sheetdash::domain::SheetCoordinates;
///
/// let coords = SheetCoordinates::new("sheet-id", "Cohort", "A1:E100").unwrap();
/// assert_eq!(coords.a1_notation(), "Cohort!A1:E100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetCoordinates {
    spreadsheet_id: String,
    sheet_name: String,
    cell_range: String,
}

impl SheetCoordinates {
    /// Creates coordinates, rejecting blank components
    pub fn new(
        spreadsheet_id: impl Into<String>,
        sheet_name: impl Into<String>,
        cell_range: impl Into<String>,
    ) -> Result<Self, String> {
        let spreadsheet_id = spreadsheet_id.into();
        let sheet_name = sheet_name.into();
        let cell_range = cell_range.into();

        if spreadsheet_id.trim().is_empty() {
            return Err("Spreadsheet ID cannot be empty".to_string());
        }
        if sheet_name.trim().is_empty() {
            return Err("Sheet name cannot be empty".to_string());
        }
        if cell_range.trim().is_empty() {
            return Err("Cell range cannot be empty".to_string());
        }

        Ok(Self {
            spreadsheet_id,
            sheet_name,
            cell_range,
        })
    }

    /// Spreadsheet the range belongs to
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Sheet (tab) name
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Range inside the sheet, e.g. `A1:E100`
    pub fn cell_range(&self) -> &str {
        &self.cell_range
    }

    /// Full A1 notation, e.g. `Cohort!A1:E100`
    ///
    /// Sheet names containing anything other than ASCII letters, digits or
    /// underscores are single-quoted, with embedded quotes doubled.
    pub fn a1_notation(&self) -> String {
        let plain = self
            .sheet_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');

        if plain {
            format!("{}!{}", self.sheet_name, self.cell_range)
        } else {
            format!(
                "'{}'!{}",
                self.sheet_name.replace('\'', "''"),
                self.cell_range
            )
        }
    }
}

impl fmt::Display for SheetCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a1_notation())
    }
}

/// Static metadata for a known sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Sheet (tab) name, the lookup key
    pub name: String,

    /// Human-readable title
    #[serde(default)]
    pub display_name: Option<String>,

    /// Icon shown next to the title
    #[serde(default)]
    pub icon: Option<String>,

    /// Cell range fetched for this sheet
    pub range: String,

    /// Columns the dashboard expects to find
    #[serde(default)]
    pub required_columns: BTreeSet<String>,
}

impl SheetConfig {
    /// Creates a sheet config with no display metadata or required columns
    pub fn new(name: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            icon: None,
            range: range.into(),
            required_columns: BTreeSet::new(),
        }
    }

    /// Sets the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the required columns
    pub fn with_required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Display name, falling back to the sheet name
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Icon, falling back to [`DEFAULT_SHEET_ICON`]
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_SHEET_ICON)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("sheets.name cannot be empty".to_string());
        }
        if self.range.trim().is_empty() {
            return Err(format!("sheets.range cannot be empty for '{}'", self.name));
        }
        if self.range.contains('!') {
            return Err(format!(
                "sheets.range for '{}' must not include a sheet prefix, got '{}'",
                self.name, self.range
            ));
        }
        Ok(())
    }
}

/// Grid properties of one sheet as reported by the spreadsheet metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetInfo {
    /// Sheet (tab) name
    pub name: String,

    /// Number of rows in the sheet grid
    pub row_count: u64,

    /// Number of columns in the sheet grid
    pub column_count: u64,
}
