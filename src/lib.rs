// Sheetdash - Google Sheets analytics dashboard
// Copyright (c) 2025 Sheetdash Contributors
// Licensed under the MIT License

//! # Sheetdash - Google Sheets analytics dashboard
//!
//! Sheetdash reads cohort retention and monetization tables from a single
//! Google Sheets spreadsheet and shows them with a few derived metrics.
//!
//! ## Overview
//!
//! This library provides:
//! - **Credential resolution** for Google service accounts (key file or secret store)
//! - **Read-only Sheets access** with lazy authentication, a TTL cache and request pacing
//! - **Normalization** of ragged cell grids into tables with named columns
//! - **Dashboard views** that fall back to sample data instead of failing
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Normalization, caching, metrics and the dashboard facade
//! - [`adapters`] - External integrations (Google Sheets, credentials)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sheetdash::config::load_config;
//! use sheetdash::core::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("sheetdash.toml")?;
//!     let dashboard = Dashboard::from_config(config);
//!
//!     let cohort = dashboard.get_table("Cohort").await?;
//!     println!(
//!         "{} rows, missing columns: {:?}",
//!         cohort.table.row_count(),
//!         cohort.missing_columns
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Sheets access returns [`domain::SheetsError`], which tells "no
//! credentials" apart from "authentication failed" and "remote read failed".
//! An empty range is not an error; it normalizes to an empty table.
//!
//! ```rust,no_run
//! use sheetdash::domain::SheetsError;
//!
//! fn describe(err: &SheetsError) -> &'static str {
//!     if err.is_auth_error() {
//!         "check the service-account credentials"
//!     } else {
//!         "try again later"
//!     }
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
