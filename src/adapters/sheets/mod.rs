//! Google Sheets adapter
//!
//! This module provides the read-only integration with the Google Sheets API:
//! service-account authentication, the REST client, and the caching client
//! the rest of the crate talks to.

pub mod api;
pub mod auth;
pub mod client;
pub mod connector;
pub mod google;
pub mod models;

pub use api::SheetsApi;
pub use auth::{
    ServiceAccountTokenProvider, StaticTokenProvider, TokenProvider, SPREADSHEETS_READONLY_SCOPE,
};
pub use client::{HealthStatus, SheetClient, SheetClientOptions};
pub use connector::{GoogleConnector, SheetsConnector};
pub use google::GoogleSheetsApi;
pub use models::{SpreadsheetMetadata, ValueRange};
