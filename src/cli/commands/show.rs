//! Show command implementation
//!
//! This module implements the `show` command: load one sheet, print it with
//! its data quality figures, and fall back to sample data when the live
//! spreadsheet cannot be read.

use crate::cli::render::render_table;
use crate::cli::{exit_code, load_dashboard_config};
use crate::core::dashboard::{Dashboard, DataSource, SheetView};
use crate::core::metrics::{format_amount, numeric_summary};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Output format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Sheet (tab) name, e.g. Cohort
    pub sheet: String,

    /// Cell range overriding the configured one, e.g. A1:F50
    #[arg(short, long)]
    pub range: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Maximum number of rows to print
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Serialize)]
struct JsonView<'a> {
    #[serde(flatten)]
    view: &'a SheetView,
    missing_percentage: f64,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(sheet = %self.sheet, "Showing sheet");

        let config = match load_dashboard_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        let dashboard = Dashboard::from_config(config);
        let view = dashboard.load_view(&self.sheet, self.range.as_deref()).await;

        match self.format {
            OutputFormat::Json => {
                let json = JsonView {
                    view: &view,
                    missing_percentage: view.quality.missing_percentage(),
                };
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Table => self.print_table(&view),
        }

        Ok(exit_code::SUCCESS)
    }

    fn print_table(&self, view: &SheetView) {
        println!(
            "{} {} ({}!{})",
            view.sheet.icon_or_default(),
            view.sheet.title(),
            view.sheet.name,
            view.range
        );
        println!();

        if let DataSource::Sample { reason } = &view.source {
            println!("⚠️  Could not load live data: {reason}");
            println!("   Showing sample data instead. Run with a valid configuration to see live values.");
            println!();
        }

        if view.is_empty() {
            println!("⚠️  No data found in '{}'", view.sheet.name);
            return;
        }

        print!("{}", render_table(&view.table.truncated(self.limit)));
        if view.table.row_count() > self.limit {
            println!("… {} more rows", view.table.row_count() - self.limit);
        }
        println!();

        println!("📊 Rows: {}", view.quality.rows);
        println!("📋 Columns: {}", view.quality.columns);
        println!("❓ Missing data: {:.1}%", view.quality.missing_percentage());

        if !view.missing_columns.is_empty() {
            let missing: Vec<&str> = view.missing_columns.iter().map(String::as_str).collect();
            println!("⚠️  Missing columns: {}", missing.join(", "));
        }

        let totals = numeric_summary(&view.table);
        if !totals.is_empty() {
            println!();
            println!("Totals:");
            for stats in totals {
                println!(
                    "  {}: sum {}, mean {}",
                    stats.column,
                    format_amount(stats.sum),
                    format_amount(stats.mean.unwrap_or_default())
                );
            }
        }
    }
}
