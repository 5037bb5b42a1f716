//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DashboardConfig, Environment};
use crate::domain::errors::DashboardError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into DashboardConfig
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use sheetdash::config::loader::load_config;
///
/// let config = load_config("sheetdash.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DashboardError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DashboardError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: DashboardConfig = toml::from_str(&contents)
        .map_err(|e| DashboardError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;
    finish(config)
}

/// Builds configuration from defaults plus environment variables only
///
/// Used when no configuration file is present; `GOOGLE_SPREADSHEET_ID` must
/// then be set for validation to pass.
pub fn load_from_env() -> Result<DashboardConfig> {
    let mut config = DashboardConfig::default();
    apply_env_overrides(&mut config)?;
    finish(config)
}

fn finish(config: DashboardConfig) -> Result<DashboardConfig> {
    config.validate().map_err(|e| {
        DashboardError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| DashboardError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DashboardError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// The deployment-facing variables keep their plain names (`ENVIRONMENT`,
/// `GOOGLE_SPREADSHEET_ID`, `CACHE_TTL`, `DEBUG`); everything else follows
/// `SHEETDASH_<SECTION>_<KEY>`.
fn apply_env_overrides(config: &mut DashboardConfig) -> Result<()> {
    if let Ok(val) = std::env::var("ENVIRONMENT") {
        config.environment = val
            .parse::<Environment>()
            .map_err(DashboardError::Configuration)?;
    }
    if let Ok(val) = std::env::var("GOOGLE_SPREADSHEET_ID") {
        config.google_sheets.spreadsheet_id = val;
    }
    if let Ok(val) = std::env::var("CACHE_TTL") {
        config.cache.ttl_seconds = parse_env_number("CACHE_TTL", &val)?;
    }
    if let Ok(val) = std::env::var("DEBUG") {
        config.application.debug = parse_bool(&val);
    }

    // Application overrides
    if let Ok(val) = std::env::var("SHEETDASH_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Google Sheets overrides
    if let Ok(val) = std::env::var("SHEETDASH_GOOGLE_SHEETS_API_BASE_URL") {
        config.google_sheets.api_base_url = val;
    }
    if let Ok(val) = std::env::var("SHEETDASH_GOOGLE_SHEETS_CREDENTIALS_PATH") {
        config.google_sheets.credentials_path = val;
    }
    if let Ok(val) = std::env::var("SHEETDASH_GOOGLE_SHEETS_CREDENTIALS_SECRET") {
        config.google_sheets.credentials_secret = val;
    }
    if let Ok(val) = std::env::var("SHEETDASH_GOOGLE_SHEETS_TIMEOUT_SECONDS") {
        config.google_sheets.timeout_seconds =
            parse_env_number("SHEETDASH_GOOGLE_SHEETS_TIMEOUT_SECONDS", &val)?;
    }

    // Cache overrides
    if let Ok(val) = std::env::var("SHEETDASH_CACHE_METADATA_TTL_SECONDS") {
        config.cache.metadata_ttl_seconds =
            parse_env_number("SHEETDASH_CACHE_METADATA_TTL_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("SHEETDASH_CACHE_MIN_REQUEST_INTERVAL_MS") {
        config.cache.min_request_interval_ms =
            parse_env_number("SHEETDASH_CACHE_MIN_REQUEST_INTERVAL_MS", &val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SHEETDASH_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool(&val);
    }
    if let Ok(val) = std::env::var("SHEETDASH_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_env_number(name: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        DashboardError::Configuration(format!(
            "{name} must be a non-negative whole number, got '{value}'"
        ))
    })
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
