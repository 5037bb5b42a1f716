//! Caching, rate-limited Sheets client
//!
//! [`SheetClient`] owns the one authenticated session for a spreadsheet. The
//! session is created lazily on first use; if creating it fails, the failure
//! sticks until [`SheetClient::reset_connection`] is called. Range reads and
//! sheet listings are cached separately and paced by a process-wide minimum
//! interval between outbound calls.

use super::api::SheetsApi;
use super::connector::{GoogleConnector, SheetsConnector};
use crate::config::DashboardConfig;
use crate::core::cache::TtlCache;
use crate::core::rate_limit::RateLimiter;
use crate::domain::{RawGrid, SheetCoordinates, SheetInfo, SheetsError, SheetsResult};
use crate::{log_cache_hit, log_remote_call};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Tunables for a [`SheetClient`]
#[derive(Debug, Clone)]
pub struct SheetClientOptions {
    pub spreadsheet_id: String,
    pub cache_ttl: Duration,
    pub metadata_ttl: Duration,
    pub min_request_interval: Duration,
}

impl SheetClientOptions {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            spreadsheet_id: config.google_sheets.spreadsheet_id.clone(),
            cache_ttl: Duration::from_secs(config.cache.ttl_seconds),
            metadata_ttl: Duration::from_secs(config.cache.metadata_ttl_seconds),
            min_request_interval: Duration::from_millis(config.cache.min_request_interval_ms),
        }
    }
}

/// Result of [`SheetClient::health_check`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub timestamp: DateTime<Utc>,
    pub service_available: bool,
    pub sheets_accessible: bool,
    pub sheets_count: usize,
    pub error_message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.service_available && self.sheets_accessible
    }
}

enum ConnectionState {
    Disconnected,
    Connected(Arc<dyn SheetsApi>),
    Failed(SheetsError),
}

type RangeKey = (String, String);

/// Cache and limiter state, mutated together under one lock
///
/// `generation` is bumped by every clear. A fetch records it on the cache
/// miss and only stores its result if no clear happened in between.
struct FetchState {
    values: TtlCache<RangeKey, RawGrid>,
    sheets: TtlCache<String, Vec<SheetInfo>>,
    limiter: RateLimiter,
    generation: u64,
}

/// Read-only client for one spreadsheet
///
/// # Example
///
/// ```no_run
/// use sheetdash::adapters::sheets::SheetClient;
/// use sheetdash::config::load_config;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config("sheetdash.toml")?;
/// let client = SheetClient::from_config(&config);
///
/// let grid = client.fetch_range("Cohort", "A1:E100").await?;
/// println!("{} rows", grid.len());
///
/// let health = client.health_check().await;
/// println!("healthy: {}", health.is_healthy());
/// # Ok(())
/// # }
/// ```
pub struct SheetClient {
    options: SheetClientOptions,
    connector: Arc<dyn SheetsConnector>,
    connection: Mutex<ConnectionState>,
    state: Mutex<FetchState>,
}

impl SheetClient {
    pub fn new(options: SheetClientOptions, connector: Arc<dyn SheetsConnector>) -> Self {
        let state = FetchState {
            values: TtlCache::new(options.cache_ttl),
            sheets: TtlCache::new(options.metadata_ttl),
            limiter: RateLimiter::new(options.min_request_interval),
            generation: 0,
        };

        Self {
            options,
            connector,
            connection: Mutex::new(ConnectionState::Disconnected),
            state: Mutex::new(state),
        }
    }

    /// Client talking to Google with the configured credentials
    pub fn from_config(config: &DashboardConfig) -> Self {
        let connector = GoogleConnector::from_config(config.environment, &config.google_sheets);
        Self::new(SheetClientOptions::from_config(config), Arc::new(connector))
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.options.spreadsheet_id
    }

    /// Returns the session, establishing it on first use
    ///
    /// # Errors
    ///
    /// `AuthenticationFailed` wrapping whatever went wrong. Once connecting
    /// has failed, every call returns that same error without trying again.
    pub async fn connect(&self) -> SheetsResult<Arc<dyn SheetsApi>> {
        let mut connection = self.connection.lock().await;

        match &*connection {
            ConnectionState::Connected(api) => return Ok(Arc::clone(api)),
            ConnectionState::Failed(err) => return Err(err.clone()),
            ConnectionState::Disconnected => {}
        }

        match self.connector.connect().await {
            Ok(api) => {
                tracing::info!(
                    spreadsheet_id = %self.options.spreadsheet_id,
                    "Connected to Google Sheets"
                );
                *connection = ConnectionState::Connected(Arc::clone(&api));
                Ok(api)
            }
            Err(e) => {
                let err = match e {
                    SheetsError::AuthenticationFailed(_) => e,
                    other => SheetsError::AuthenticationFailed(other.to_string()),
                };
                tracing::error!(error = %err, "Failed to connect to Google Sheets");
                *connection = ConnectionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Forgets the session or the sticky connection failure
    pub async fn reset_connection(&self) {
        let mut connection = self.connection.lock().await;
        *connection = ConnectionState::Disconnected;
        tracing::debug!("Connection state reset");
    }

    /// Reads `cell_range` of `sheet_name`
    ///
    /// Served from cache while the entry is younger than the cache TTL.
    /// Otherwise waits for the rate limiter and calls the remote API once.
    ///
    /// # Errors
    ///
    /// - `AuthenticationFailed` if no session can be established
    /// - `RemoteFetchFailed` for transport errors, error statuses, or an
    ///   unusable sheet name or range
    /// - `InvalidResponse` if the response cannot be decoded
    pub async fn fetch_range(&self, sheet_name: &str, cell_range: &str) -> SheetsResult<RawGrid> {
        let key = (sheet_name.to_string(), cell_range.to_string());

        let generation = {
            let mut state = self.state.lock().await;
            if let Some(grid) = state.values.get(&key, Instant::now()) {
                log_cache_hit!(sheet_name, cell_range);
                return Ok(grid);
            }
            state.generation
        };

        let coordinates =
            SheetCoordinates::new(self.options.spreadsheet_id.as_str(), sheet_name, cell_range)
                .map_err(|e| SheetsError::fetch_failed(sheet_name, e))?;

        let api = self.connect().await?;
        self.wait_for_slot().await;

        log_remote_call!(sheet_name, cell_range);
        let grid = api.get_values(&coordinates).await.map_err(|e| {
            tracing::error!(sheet = %sheet_name, range = %cell_range, error = %e, "Range fetch failed");
            e
        })?;

        tracing::info!(
            sheet = %sheet_name,
            range = %cell_range,
            rows = grid.len(),
            "Range fetched"
        );

        let mut state = self.state.lock().await;
        if state.generation == generation {
            state.values.insert(key, grid.clone(), Instant::now());
        } else {
            tracing::debug!(
                sheet = %sheet_name,
                range = %cell_range,
                "Cache cleared during fetch, result not cached"
            );
        }

        Ok(grid)
    }

    /// Lists the sheets of the spreadsheet
    ///
    /// Cached under its own TTL, independent of range reads.
    pub async fn list_sheets(&self) -> SheetsResult<Vec<SheetInfo>> {
        let key = self.options.spreadsheet_id.clone();

        let generation = {
            let mut state = self.state.lock().await;
            if let Some(sheets) = state.sheets.get(&key, Instant::now()) {
                log_cache_hit!("<metadata>", key);
                return Ok(sheets);
            }
            state.generation
        };

        let api = self.connect().await?;
        self.wait_for_slot().await;

        tracing::info!(spreadsheet_id = %key, "Listing sheets");
        let sheets = api.get_sheets(&key).await.map_err(|e| {
            tracing::error!(error = %e, "Sheet listing failed");
            e
        })?;

        tracing::debug!(count = sheets.len(), "Sheets listed");

        let mut state = self.state.lock().await;
        if state.generation == generation {
            state.sheets.insert(key, sheets.clone(), Instant::now());
        }

        Ok(sheets)
    }

    /// Drops every cached range and listing; returns how many were dropped
    ///
    /// Fetches already in flight still return their result but no longer
    /// store it.
    pub async fn clear_cache(&self) -> usize {
        let mut state = self.state.lock().await;
        state.generation += 1;
        let cleared = state.values.clear() + state.sheets.clear();
        tracing::info!(entries = cleared, "Cache cleared");
        cleared
    }

    /// Checks that a session can be established and the spreadsheet listed
    ///
    /// Never fails; problems are reported in the returned status.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus {
            timestamp: Utc::now(),
            service_available: false,
            sheets_accessible: false,
            sheets_count: 0,
            error_message: None,
        };

        if let Err(e) = self.connect().await {
            tracing::warn!(error = %e, "Health check failed");
            status.error_message = Some(e.to_string());
            return status;
        }
        status.service_available = true;

        match self.list_sheets().await {
            Ok(sheets) => {
                status.sheets_count = sheets.len();
                status.sheets_accessible = !sheets.is_empty();
                tracing::info!(sheets = sheets.len(), "Health check passed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Health check failed");
                status.error_message = Some(e.to_string());
            }
        }

        status
    }

    /// Reserves the next outbound slot and sleeps until it, outside the lock
    async fn wait_for_slot(&self) {
        let slot = {
            let mut state = self.state.lock().await;
            state.limiter.reserve(Instant::now())
        };
        tokio::time::sleep_until(slot).await;
    }
}

impl std::fmt::Debug for SheetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetClient")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
