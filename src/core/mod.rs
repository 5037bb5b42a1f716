//! Core logic for sheetdash.
//!
//! # Modules
//!
//! - [`normalize`] - Raw grid to table conversion and required-column checks
//! - [`cache`] - Time-to-live cache used by the Sheets client
//! - [`rate_limit`] - Minimum spacing between outbound API calls
//! - [`metrics`] - Data quality and numeric summaries
//! - [`sample`] - Fixed sample tables used as a fallback
//! - [`dashboard`] - Facade combining fetch, normalization and fallback
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetdash::config::load_config;
//! use sheetdash::core::dashboard::Dashboard;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sheetdash.toml")?;
//! let dashboard = Dashboard::from_config(config);
//!
//! let view = dashboard.load_view("Cohort", None).await;
//! if view.is_sample() {
//!     println!("Showing sample data");
//! }
//! println!("{} rows", view.table.row_count());
//!
//! // Reload action
//! dashboard.invalidate().await;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod dashboard;
pub mod metrics;
pub mod normalize;
pub mod rate_limit;
pub mod sample;

pub use dashboard::{Dashboard, DataSource, SheetListing, SheetView};
pub use normalize::{normalize, NormalizedTable};
