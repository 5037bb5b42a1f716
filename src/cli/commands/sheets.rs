//! Sheets command implementation
//!
//! Lists the tabs of the configured spreadsheet with their display names.

use crate::cli::{exit_code, exit_code_for, load_dashboard_config};
use crate::core::dashboard::Dashboard;
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the sheets command
#[derive(Args, Debug)]
pub struct SheetsArgs {}

impl SheetsArgs {
    /// Execute the sheets command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_dashboard_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        let dashboard = Dashboard::from_config(config);
        let sheets = match dashboard.list_sheets().await {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(e, "Failed to list sheets");
                println!("❌ Failed to list sheets");
                println!("   Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if sheets.is_empty() {
            println!("No sheets found in spreadsheet {}", dashboard.client().spreadsheet_id());
            return Ok(exit_code::SUCCESS);
        }

        println!("📚 Sheets in {}", dashboard.client().spreadsheet_id());
        println!();
        for sheet in &sheets {
            let marker = if sheet.configured { "" } else { " (not configured)" };
            println!(
                "  {} {} [{}] {} rows x {} columns{marker}",
                sheet.icon, sheet.display_name, sheet.name, sheet.row_count, sheet.column_count
            );
        }
        println!();

        Ok(exit_code::SUCCESS)
    }
}
