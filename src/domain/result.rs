//! Result type alias for sheetdash

use super::errors::{DashboardError, SheetsError};

/// Result type alias for sheetdash operations
///
/// # Examples
///
/// ```
/// use sheetdash::domain::result::Result;
/// use sheetdash::domain::errors::DashboardError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DashboardError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Result type for the Sheets access layer
pub type SheetsResult<T> = std::result::Result<T, SheetsError>;
