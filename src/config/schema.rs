//! Configuration schema types

use crate::domain::SheetConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Runtime environment
///
/// Selects where service-account credentials come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: credentials read from a JSON key file
    #[default]
    Development,
    /// Deployed: credentials read from the secret store
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!(
                "Invalid environment '{other}'. Must be one of: development, production"
            )),
        }
    }
}

/// Root configuration, mapped from the TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Runtime environment (development, production)
    #[serde(default)]
    pub environment: Environment,

    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Spreadsheet and API access
    #[serde(default)]
    pub google_sheets: GoogleSheetsConfig,

    /// Caching and rate limiting
    #[serde(default)]
    pub cache: CacheConfig,

    /// Known sheets and their metadata
    #[serde(default = "default_sheets")]
    pub sheets: Vec<SheetConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            application: ApplicationConfig::default(),
            google_sheets: GoogleSheetsConfig::default(),
            cache: CacheConfig::default(),
            sheets: default_sheets(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.google_sheets.validate()?;
        self.cache.validate()?;

        let mut names = HashSet::new();
        for sheet in &self.sheets {
            sheet.validate()?;
            if !names.insert(sheet.name.as_str()) {
                return Err(format!("Duplicate sheet configuration for '{}'", sheet.name));
            }
        }

        self.logging.validate()?;
        Ok(())
    }

    /// Metadata for a configured sheet
    pub fn sheet(&self, name: &str) -> Option<&SheetConfig> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Metadata for any sheet: configured values, or the default range with no
    /// required columns for sheets that aren't configured
    pub fn sheet_or_default(&self, name: &str) -> SheetConfig {
        self.sheet(name)
            .cloned()
            .unwrap_or_else(|| SheetConfig::new(name, &self.google_sheets.default_range))
    }

    /// Log level after applying the debug switch
    pub fn effective_log_level(&self) -> &str {
        if self.application.debug {
            "debug"
        } else {
            &self.application.log_level
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Debug mode; forces debug logging
    #[serde(default)]
    pub debug: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            debug: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Google Sheets access configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSheetsConfig {
    /// Spreadsheet ID (the long token in the sheet URL)
    #[serde(default)]
    pub spreadsheet_id: String,

    /// Sheets REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Service-account key file used in development
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,

    /// Secret-store key holding the credential JSON in production
    #[serde(default = "default_credentials_secret")]
    pub credentials_secret: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Range used for sheets without configuration
    #[serde(default = "default_range")]
    pub default_range: String,
}

impl Default for GoogleSheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            api_base_url: default_api_base_url(),
            credentials_path: default_credentials_path(),
            credentials_secret: default_credentials_secret(),
            timeout_seconds: default_timeout_seconds(),
            default_range: default_range(),
        }
    }
}

impl GoogleSheetsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(
                "google_sheets.spreadsheet_id cannot be empty (set GOOGLE_SPREADSHEET_ID)"
                    .to_string(),
            );
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err("google_sheets.api_base_url must start with http:// or https://".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("google_sheets.timeout_seconds must be > 0".to_string());
        }

        if self.credentials_secret.trim().is_empty() {
            return Err("google_sheets.credentials_secret cannot be empty".to_string());
        }

        if self.default_range.trim().is_empty() {
            return Err("google_sheets.default_range cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Cache and rate-limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of cached range reads, in seconds
    #[serde(default = "default_cache_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Lifetime of the cached sheet listing, in seconds
    #[serde(default = "default_metadata_ttl_seconds")]
    pub metadata_ttl_seconds: u64,

    /// Minimum spacing between outbound API calls, in milliseconds
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl_seconds(),
            metadata_ttl_seconds: default_metadata_ttl_seconds(),
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl_seconds == 0 {
            return Err("cache.ttl_seconds must be > 0".to_string());
        }
        if self.metadata_ttl_seconds == 0 {
            return Err("cache.metadata_ttl_seconds must be > 0".to_string());
        }
        if self.min_request_interval_ms > 60_000 {
            return Err(format!(
                "cache.min_request_interval_ms must be <= 60000, got {}",
                self.min_request_interval_ms
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Sheets the dashboard knows about out of the box
pub fn default_sheets() -> Vec<SheetConfig> {
    vec![
        SheetConfig::new("Cohort", "A1:E100")
            .with_display_name("Cohort Analysis")
            .with_icon("📈")
            .with_required_columns([
                "COHORT",
                "USERS",
                "RETENTION_D1",
                "RETENTION_D7",
                "RETENTION_D30",
            ]),
        SheetConfig::new("Monetization", "A1:E100")
            .with_display_name("Monetization")
            .with_icon("💰")
            .with_required_columns(["INSTALL_DATE", "REVENUE", "DAU", "ARPU", "CONVERTION"]),
        SheetConfig::new("Convertion", "A1:Z100")
            .with_display_name("Conversion")
            .with_icon("🎯"),
    ]
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base_url() -> String {
    "https://sheets.googleapis.com/v4".to_string()
}

fn default_credentials_path() -> String {
    "config/credentials.json".to_string()
}

fn default_credentials_secret() -> String {
    "GOOGLE_SHEETS_CREDENTIALS_JSON".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_range() -> String {
    "A1:Z1000".to_string()
}

fn default_cache_ttl_seconds() -> u64 {
    300
}

fn default_metadata_ttl_seconds() -> u64 {
    600
}

fn default_min_request_interval_ms() -> u64 {
    100
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
