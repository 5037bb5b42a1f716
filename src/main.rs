// Sheetdash - Google Sheets analytics dashboard
// Copyright (c) 2025 Sheetdash Contributors
// Licensed under the MIT License

use clap::Parser;
use sheetdash::cli::{exit_code, load_dashboard_config, Cli, Commands};
use sheetdash::config::LoggingConfig;
use sheetdash::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; commands
    // report configuration errors themselves.
    let (config_level, logging_config) = match load_dashboard_config(&cli.config) {
        Ok(config) => (
            config.effective_log_level().to_string(),
            config.logging.clone(),
        ),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_level);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(exit_code::FATAL);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Sheetdash - Google Sheets analytics dashboard"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            exit_code::FATAL
        }
    };

    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Show(args) => args.execute(&cli.config).await,
        Commands::Sheets(args) => args.execute(&cli.config).await,
        Commands::Health(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
