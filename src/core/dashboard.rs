//! Dashboard facade
//!
//! [`Dashboard`] is what views talk to. It resolves per-sheet metadata from
//! the configuration, fetches through the [`SheetClient`], and normalizes the
//! result. [`Dashboard::load_view`] is the error boundary: failures become a
//! message plus sample data instead of an error.

use super::metrics::{quality_report, QualityReport};
use super::normalize::{normalize, NormalizedTable};
use super::sample::sample_table;
use crate::adapters::sheets::{HealthStatus, SheetClient};
use crate::config::DashboardConfig;
use crate::domain::{SheetConfig, SheetsError, SheetsResult, Table};
use serde::Serialize;
use std::collections::BTreeSet;

/// Where the data in a [`SheetView`] came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Sample { reason: String },
}

/// Everything a view needs to render one sheet
#[derive(Debug, Clone, Serialize)]
pub struct SheetView {
    pub sheet: SheetConfig,
    pub range: String,
    pub table: Table,
    pub missing_columns: BTreeSet<String>,
    pub quality: QualityReport,
    pub source: DataSource,
}

impl SheetView {
    pub fn is_sample(&self) -> bool {
        matches!(self.source, DataSource::Sample { .. })
    }

    /// Live fetch that returned no rows at all
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// A sheet of the live spreadsheet with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetListing {
    pub name: String,
    pub display_name: String,
    pub icon: String,
    pub row_count: u64,
    pub column_count: u64,
    /// Whether the sheet has an entry in the configuration
    pub configured: bool,
}

pub struct Dashboard {
    config: DashboardConfig,
    client: SheetClient,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, client: SheetClient) -> Self {
        Self { config, client }
    }

    /// Dashboard backed by the real Google Sheets API
    pub fn from_config(config: DashboardConfig) -> Self {
        let client = SheetClient::from_config(&config);
        Self::new(config, client)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn client(&self) -> &SheetClient {
        &self.client
    }

    /// Fetches and normalizes a sheet at its configured range
    pub async fn get_table(&self, sheet_name: &str) -> SheetsResult<NormalizedTable> {
        let sheet = self.config.sheet_or_default(sheet_name);
        self.fetch_normalized(&sheet, &sheet.range).await
    }

    async fn fetch_normalized(
        &self,
        sheet: &SheetConfig,
        cell_range: &str,
    ) -> SheetsResult<NormalizedTable> {
        let grid = self.client.fetch_range(&sheet.name, cell_range).await?;
        let normalized = normalize(&grid, &sheet.required_columns);

        if normalized.is_empty() {
            tracing::warn!(sheet = %sheet.name, range = %cell_range, "No data found");
        } else {
            tracing::info!(
                sheet = %sheet.name,
                rows = normalized.table.row_count(),
                columns = normalized.table.column_count(),
                "Sheet loaded"
            );
        }

        Ok(normalized)
    }

    /// Manual refresh: drops cached data and any sticky connection failure
    pub async fn invalidate(&self) {
        let cleared = self.client.clear_cache().await;
        self.client.reset_connection().await;
        tracing::info!(entries = cleared, "Dashboard data invalidated");
    }

    /// Loads a sheet for display, falling back to sample data on failure
    ///
    /// Never fails. `range` overrides the configured range.
    pub async fn load_view(&self, sheet_name: &str, range: Option<&str>) -> SheetView {
        let sheet = self.config.sheet_or_default(sheet_name);
        let range = range.unwrap_or(&sheet.range).to_string();

        match self.fetch_normalized(&sheet, &range).await {
            Ok(normalized) => {
                let quality = quality_report(&normalized.table);
                SheetView {
                    sheet,
                    range,
                    table: normalized.table,
                    missing_columns: normalized.missing_columns,
                    quality,
                    source: DataSource::Live,
                }
            }
            Err(e) => {
                tracing::error!(
                    sheet = %sheet.name,
                    error = %e,
                    "Falling back to sample data"
                );
                self.sample_view(sheet, range, &e)
            }
        }
    }

    fn sample_view(&self, sheet: SheetConfig, range: String, error: &SheetsError) -> SheetView {
        let table = sample_table(&sheet.name);
        let missing_columns = sheet
            .required_columns
            .iter()
            .filter(|c| !table.has_column(c))
            .cloned()
            .collect();
        let quality = quality_report(&table);

        SheetView {
            sheet,
            range,
            table,
            missing_columns,
            quality,
            source: DataSource::Sample {
                reason: error.to_string(),
            },
        }
    }

    /// Live sheets with display names and icons from the configuration
    pub async fn list_sheets(&self) -> SheetsResult<Vec<SheetListing>> {
        let sheets = self.client.list_sheets().await?;

        Ok(sheets
            .into_iter()
            .map(|info| {
                let configured = self.config.sheet(&info.name);
                let meta = self.config.sheet_or_default(&info.name);
                SheetListing {
                    display_name: meta.title().to_string(),
                    icon: meta.icon_or_default().to_string(),
                    configured: configured.is_some(),
                    name: info.name,
                    row_count: info.row_count,
                    column_count: info.column_count,
                }
            })
            .collect())
    }

    pub async fn health(&self) -> HealthStatus {
        self.client.health_check().await
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("spreadsheet_id", &self.client.spreadsheet_id())
            .field("sheets", &self.config.sheets.len())
            .finish()
    }
}
