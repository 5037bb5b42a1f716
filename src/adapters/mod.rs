//! External system integrations for sheetdash.
//!
//! - [`credentials`] - Service-account credential resolution (file or secret store)
//! - [`sheets`] - Google Sheets API access with caching and rate limiting
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits
//! ([`sheets::SheetsApi`], [`sheets::SheetsConnector`],
//! [`credentials::SecretStore`]) so tests can substitute fakes.
//!
//! ```rust,no_run
//! use sheetdash::adapters::sheets::SheetClient;
//! use sheetdash::config::load_from_env;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_from_env()?;
//! let client = SheetClient::from_config(&config);
//!
//! for sheet in client.list_sheets().await? {
//!     println!("{} ({} x {})", sheet.name, sheet.row_count, sheet.column_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod sheets;
