//! Validate config command implementation
//!
//! This module implements the `validate-config` command: load and validate
//! the configuration, then check that credentials can be resolved.

use crate::adapters::credentials::CredentialResolver;
use crate::cli::{exit_code, load_dashboard_config};
use crate::log_error_with_context;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Skip the credential check
    #[arg(long)]
    pub skip_credentials: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        let config = match load_dashboard_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(exit_code::CONFIG_ERROR);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Environment: {}", config.environment);
        println!("  Log Level: {}", config.effective_log_level());
        println!("  Spreadsheet: {}", config.google_sheets.spreadsheet_id);
        println!("  API Base URL: {}", config.google_sheets.api_base_url);
        println!("  Cache TTL: {}s", config.cache.ttl_seconds);
        println!("  Metadata TTL: {}s", config.cache.metadata_ttl_seconds);
        println!("  Request Interval: {}ms", config.cache.min_request_interval_ms);
        println!("  Sheets:");
        for sheet in &config.sheets {
            println!(
                "    {} {} [{}!{}] required: {}",
                sheet.icon_or_default(),
                sheet.title(),
                sheet.name,
                sheet.range,
                sheet.required_columns.len()
            );
        }
        println!();

        if self.skip_credentials {
            return Ok(exit_code::SUCCESS);
        }

        let resolver = CredentialResolver::from_config(&config.google_sheets);
        match resolver.resolve(config.environment) {
            Ok(credentials) => {
                println!("✅ Credentials resolved");
                println!("   Service account: {}", credentials.client_email());
                println!("   Project: {}", credentials.project_id());
                println!();
                Ok(exit_code::SUCCESS)
            }
            Err(e) => {
                log_error_with_context!(e, "Credential resolution failed");
                println!("❌ Credentials could not be resolved");
                println!("   Error: {e}");
                println!();
                Ok(exit_code::AUTH_ERROR)
            }
        }
    }
}
