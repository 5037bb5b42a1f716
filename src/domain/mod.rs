//! Domain models and types for sheetdash.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Sheet addressing** ([`SheetCoordinates`], [`SheetConfig`], [`SheetInfo`])
//! - **Tabular data** ([`RawGrid`], [`Table`], [`Row`])
//! - **Error types** ([`DashboardError`], [`SheetsError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, DashboardError>`]:
//!
//! ```rust,no_run
//! use sheetdash::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = sheetdash::config::load_config("sheetdash.toml")?;
//!     println!("{}", config.google_sheets.spreadsheet_id);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;
pub mod sheet;
pub mod table;

// Re-export commonly used types for convenience
pub use errors::{DashboardError, SheetsError};
pub use result::{Result, SheetsResult};
pub use sheet::{SheetConfig, SheetCoordinates, SheetInfo, DEFAULT_SHEET_ICON};
pub use table::{RawGrid, Row, Table};
