//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use crate::cli::{exit_code, DEFAULT_CONFIG_PATH};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing sheetdash configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(exit_code::CONFIG_ERROR);
        }

        match fs::write(&self.output, starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Share the spreadsheet with your service account's e-mail");
                println!("  2. Set GOOGLE_SPREADSHEET_ID in .env or edit {}", self.output);
                println!("  3. Development: save the key file as config/credentials.json");
                println!("     Production: set GOOGLE_SHEETS_CREDENTIALS_JSON to the key JSON");
                println!("  4. Validate configuration: sheetdash validate-config");
                println!("  5. Show a sheet: sheetdash show Cohort");
                println!();
                Ok(exit_code::SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(exit_code::FATAL)
            }
        }
    }
}

/// Starter configuration with the default sheets spelled out
pub fn starter_config() -> &'static str {
    r#"# Sheetdash Configuration File
# Read-only Google Sheets analytics dashboard

# development reads config/credentials.json; production reads the secret below
environment = "development"  # development | production

[application]
log_level = "info"  # trace | debug | info | warn | error
debug = false

[google_sheets]
spreadsheet_id = "${GOOGLE_SPREADSHEET_ID}"
api_base_url = "https://sheets.googleapis.com/v4"
credentials_path = "config/credentials.json"
credentials_secret = "GOOGLE_SHEETS_CREDENTIALS_JSON"
timeout_seconds = 30
default_range = "A1:Z1000"

[cache]
ttl_seconds = 300
metadata_ttl_seconds = 600
min_request_interval_ms = 100

[[sheets]]
name = "Cohort"
display_name = "Cohort Analysis"
icon = "📈"
range = "A1:E100"
required_columns = ["COHORT", "USERS", "RETENTION_D1", "RETENTION_D7", "RETENTION_D30"]

[[sheets]]
name = "Monetization"
display_name = "Monetization"
icon = "💰"
range = "A1:E100"
required_columns = ["INSTALL_DATE", "REVENUE", "DAU", "ARPU", "CONVERTION"]

[[sheets]]
name = "Convertion"
display_name = "Conversion"
icon = "🎯"
range = "A1:Z100"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"  # daily | hourly | never
"#
}
