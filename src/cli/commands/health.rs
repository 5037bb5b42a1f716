//! Health command implementation
//!
//! Runs the Sheets client health check and prints the result.

use crate::cli::{exit_code, load_dashboard_config};
use crate::core::dashboard::Dashboard;
use clap::Args;

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

impl HealthArgs {
    /// Execute the health command
    ///
    /// Exits 0 when healthy, 3 when no session could be established and 4
    /// when the spreadsheet could not be listed or is empty.
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
        let status = dashboard.health().await;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            let mark = |ok: bool| if ok { "✅" } else { "❌" };
            println!("🩺 Google Sheets health check ({})", status.timestamp.to_rfc3339());
            println!();
            println!("  {} Service available", mark(status.service_available));
            println!("  {} Sheets accessible", mark(status.sheets_accessible));
            println!("  Sheets: {}", status.sheets_count);
            if let Some(ref message) = status.error_message {
                println!("  Error: {message}");
            }
            println!();
        }

        let code = if !status.service_available {
            exit_code::AUTH_ERROR
        } else if !status.sheets_accessible {
            exit_code::REMOTE_ERROR
        } else {
            exit_code::SUCCESS
        };
        Ok(code)
    }
}
