//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for sheetdash using clap.

pub mod commands;
pub mod render;

use crate::config::{load_config, load_from_env, DashboardConfig};
use crate::domain::{Result, SheetsError};
use clap::{Parser, Subcommand};
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "sheetdash.toml";

/// Process exit codes
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const AUTH_ERROR: i32 = 3;
    pub const REMOTE_ERROR: i32 = 4;
    pub const FATAL: i32 = 5;
}

/// Sheetdash - Google Sheets analytics dashboard
#[derive(Parser, Debug)]
#[command(name = "sheetdash")]
#[command(version, about, long_about = None)]
#[command(author = "Sheetdash Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "SHEETDASH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHEETDASH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a sheet as a table with quality metrics
    Show(commands::show::ShowArgs),

    /// List the sheets of the spreadsheet
    Sheets(commands::sheets::SheetsArgs),

    /// Check connectivity to Google Sheets
    Health(commands::health::HealthArgs),

    /// Validate configuration file and credentials
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

/// Loads configuration for a command
///
/// The default path is optional: when `sheetdash.toml` does not exist the
/// configuration is built from defaults and environment variables. Any other
/// path must exist.
pub fn load_dashboard_config(path: &str) -> Result<DashboardConfig> {
    if path == DEFAULT_CONFIG_PATH && !Path::new(path).exists() {
        tracing::debug!("No {DEFAULT_CONFIG_PATH} found, using environment configuration");
        return load_from_env();
    }
    load_config(path)
}

/// Exit code for a Sheets failure
pub fn exit_code_for(error: &SheetsError) -> i32 {
    if error.is_auth_error() {
        exit_code::AUTH_ERROR
    } else {
        exit_code::REMOTE_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::parse_from(["sheetdash", "show", "Cohort"]);
        assert_eq!(cli.config, "sheetdash.toml");
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.sheet, "Cohort");
                assert_eq!(args.limit, 20);
                assert!(args.range.is_none());
            }
            other => panic!("Expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_show_with_options() {
        let cli = Cli::parse_from([
            "sheetdash", "show", "Monetization", "--range", "A1:F50", "--format", "json",
            "--limit", "5",
        ]);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.range.as_deref(), Some("A1:F50"));
                assert_eq!(args.format, commands::show::OutputFormat::Json);
                assert_eq!(args.limit, 5);
            }
            other => panic!("Expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["sheetdash", "--config", "custom.toml", "sheets"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Sheets(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["sheetdash", "--log-level", "debug", "health"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::Health(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["sheetdash", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["sheetdash", "init", "--force"]);
        assert!(matches!(cli.command, Commands::Init(ref args) if args.force));
    }

    #[test]
    fn test_exit_code_for() {
        assert_eq!(
            exit_code_for(&SheetsError::AuthenticationFailed("x".into())),
            exit_code::AUTH_ERROR
        );
        assert_eq!(
            exit_code_for(&SheetsError::fetch_failed("Cohort", "503")),
            exit_code::REMOTE_ERROR
        );
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        assert!(load_dashboard_config("/nonexistent/sheetdash.toml").is_err());
    }
}
