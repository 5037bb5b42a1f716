//! Configuration management for sheetdash.
//!
//! Configuration comes from a TOML file with `${VAR_NAME}` substitution,
//! followed by environment overrides, followed by validation. Without a file,
//! [`load_from_env`] starts from defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "development"
//!
//! [application]
//! log_level = "info"
//!
//! [google_sheets]
//! spreadsheet_id = "${GOOGLE_SPREADSHEET_ID}"
//! credentials_path = "config/credentials.json"
//!
//! [cache]
//! ttl_seconds = 300
//!
//! [[sheets]]
//! name = "Cohort"
//! display_name = "Cohort Analysis"
//! icon = "📈"
//! range = "A1:E100"
//! required_columns = ["COHORT", "USERS", "RETENTION_D1"]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `ENVIRONMENT` | `development` or `production` |
//! | `GOOGLE_SPREADSHEET_ID` | spreadsheet to read |
//! | `CACHE_TTL` | range cache lifetime in seconds |
//! | `DEBUG` | `true` forces debug logging |
//! | `SHEETDASH_<SECTION>_<KEY>` | any other setting, e.g. `SHEETDASH_CACHE_MIN_REQUEST_INTERVAL_MS` |

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_from_env};
pub use schema::{
    default_sheets, ApplicationConfig, CacheConfig, DashboardConfig, Environment,
    GoogleSheetsConfig, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
