//! Logging and observability
//!
//! Structured logging through `tracing`, with optional JSON file output.
//!
//! # Example
//!
//! ```no_run
//! use sheetdash::logging::init_logging;
//! use sheetdash::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard, LOG_FILE_NAME};

/// Log a request about to go to the Sheets API
///
/// # Example
///
/// ```no_run
/// use sheetdash::log_remote_call;
///
/// log_remote_call!("Cohort", "A1:E100");
/// ```
#[macro_export]
macro_rules! log_remote_call {
    ($sheet:expr, $range:expr) => {
        tracing::info!(
            sheet = %$sheet,
            range = %$range,
            "Fetching range from Google Sheets"
        );
    };
}

/// Log a cache hit
///
/// # Example
///
/// ```no_run
/// use sheetdash::log_cache_hit;
///
/// log_cache_hit!("Cohort", "A1:E100");
/// ```
#[macro_export]
macro_rules! log_cache_hit {
    ($sheet:expr, $range:expr) => {
        tracing::debug!(
            sheet = %$sheet,
            range = %$range,
            "Serving range from cache"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use sheetdash::log_error_with_context;
/// use sheetdash::domain::SheetsError;
///
/// let error = SheetsError::fetch_failed("Cohort", "timeout");
/// log_error_with_context!(&error, "Failed to load sheet");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
