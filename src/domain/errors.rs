//! Domain error types
//!
//! This module defines the error hierarchy for sheetdash.
//! Errors are domain-specific and don't expose third-party types: HTTP and
//! OAuth failures are flattened into messages at the adapter boundary.

use thiserror::Error;

/// Main sheetdash error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Google Sheets access errors
    #[error("Google Sheets error: {0}")]
    Sheets(#[from] SheetsError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while resolving credentials or talking to the Sheets API
///
/// Empty ranges are not errors; they surface as an empty table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetsError {
    /// No credential file or secret could be found
    #[error("Credentials not found: {0}")]
    CredentialsNotFound(String),

    /// Credential content is not valid JSON or lacks required fields
    #[error("Credentials malformed: {0}")]
    CredentialsMalformed(String),

    /// Establishing an authenticated session failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A read against the remote spreadsheet failed
    #[error("Failed to fetch '{sheet_name}': {cause}")]
    RemoteFetchFailed { sheet_name: String, cause: String },

    /// The remote answered with a payload we could not interpret
    #[error("Invalid response from Sheets API: {0}")]
    InvalidResponse(String),
}

impl SheetsError {
    /// Builds a `RemoteFetchFailed` for the given sheet
    pub fn fetch_failed(sheet_name: impl Into<String>, cause: impl Into<String>) -> Self {
        SheetsError::RemoteFetchFailed {
            sheet_name: sheet_name.into(),
            cause: cause.into(),
        }
    }

    /// Whether the error came from credential resolution or authentication
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            SheetsError::CredentialsNotFound(_)
                | SheetsError::CredentialsMalformed(_)
                | SheetsError::AuthenticationFailed(_)
        )
    }
}

impl DashboardError {
    /// Returns the wrapped Sheets error, if any
    pub fn as_sheets_error(&self) -> Option<&SheetsError> {
        match self {
            DashboardError::Sheets(e) => Some(e),
            _ => None,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Configuration(format!("TOML parse error: {err}"))
    }
}
