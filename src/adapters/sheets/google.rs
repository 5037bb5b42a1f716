//! Google Sheets API v4 over HTTPS
//!
//! Every request carries a bearer token from the configured
//! [`TokenProvider`]. Requests are made once; failures are reported to the
//! caller without retrying.

use super::api::SheetsApi;
use super::auth::TokenProvider;
use super::models::{SpreadsheetMetadata, ValueRange};
use crate::domain::{RawGrid, SheetCoordinates, SheetInfo, SheetsError, SheetsResult};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Sheets API client
///
/// # Example
///
/// ```no_run
/// use sheetdash::adapters::sheets::{GoogleSheetsApi, SheetsApi, StaticTokenProvider};
/// use sheetdash::domain::SheetCoordinates;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = GoogleSheetsApi::new(
///     "https://sheets.googleapis.com/v4",
///     30,
///     Arc::new(StaticTokenProvider::new("ya29.token")),
/// )?;
/// let coords = SheetCoordinates::new("1AbC", "Cohort", "A1:E100")?;
/// let grid = api.get_values(&coords).await?;
/// println!("{} rows", grid.len());
/// # Ok(())
/// # }
/// ```
pub struct GoogleSheetsApi {
    base_url: Url,
    client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl GoogleSheetsApi {
    /// Creates a client for `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the base URL is invalid or the HTTP
    /// client cannot be built, since no session can be established either way.
    pub fn new(
        base_url: &str,
        timeout_seconds: u64,
        tokens: Arc<dyn TokenProvider>,
    ) -> SheetsResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            SheetsError::AuthenticationFailed(format!("invalid API base URL '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SheetsError::AuthenticationFailed(format!(
                "API base URL '{base_url}' cannot carry a path"
            )));
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_seconds))
            .connect_timeout(Duration::from_secs(timeout_seconds.min(30)))
            .build()
            .map_err(|e| {
                SheetsError::AuthenticationFailed(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url,
            client,
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> SheetsResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SheetsError::InvalidResponse(format!(
                    "API base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues an authenticated GET and decodes the JSON body
    ///
    /// `label` names the resource in `RemoteFetchFailed` errors.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, label: &str) -> SheetsResult<T> {
        let token = self.tokens.access_token().await?;

        tracing::debug!(url = %url, resource = %label, "Sending Sheets API request");

        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| SheetsError::fetch_failed(label, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::fetch_failed(
                label,
                format!("Sheets API returned status {status}: {}", api_error_message(&body)),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SheetsError::fetch_failed(label, e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            SheetsError::InvalidResponse(format!("could not decode response for '{label}': {e}"))
        })
    }
}

/// Pulls `error.message` out of a Google API error body, if present
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl SheetsApi for GoogleSheetsApi {
    async fn get_values(&self, coordinates: &SheetCoordinates) -> SheetsResult<RawGrid> {
        let a1 = coordinates.a1_notation();
        let url = self.endpoint(&[
            "spreadsheets",
            coordinates.spreadsheet_id(),
            "values",
            &a1,
        ])?;

        let value_range: ValueRange = self.get_json(url, coordinates.sheet_name()).await?;
        Ok(value_range.into_grid())
    }

    async fn get_sheets(&self, spreadsheet_id: &str) -> SheetsResult<Vec<SheetInfo>> {
        let mut url = self.endpoint(&["spreadsheets", spreadsheet_id])?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties");

        let label = format!("spreadsheet {spreadsheet_id}");
        let metadata: SpreadsheetMetadata = self.get_json(url, &label).await?;
        Ok(metadata.into_sheet_infos())
    }
}

impl std::fmt::Debug for GoogleSheetsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSheetsApi")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sheets::StaticTokenProvider;

    fn api(base: &str) -> GoogleSheetsApi {
        GoogleSheetsApi::new(base, 5, Arc::new(StaticTokenProvider::new("t"))).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = api("https://sheets.googleapis.com/v4");
        let url = api
            .endpoint(&["spreadsheets", "abc", "values", "Cohort!A1:E100"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/Cohort!A1:E100"
        );
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let api = api("https://sheets.googleapis.com/v4/");
        let url = api.endpoint(&["spreadsheets", "abc"]).unwrap();
        assert_eq!(url.as_str(), "https://sheets.googleapis.com/v4/spreadsheets/abc");
    }

    #[test]
    fn test_endpoint_encodes_spaces() {
        let api = api("https://sheets.googleapis.com/v4");
        let url = api.endpoint(&["values", "'My Sheet'!A1:B2"]).unwrap();
        assert!(url.as_str().ends_with("/values/'My%20Sheet'!A1:B2"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = GoogleSheetsApi::new("not a url", 5, Arc::new(StaticTokenProvider::new("t")));
        assert!(matches!(result, Err(SheetsError::AuthenticationFailed(_))));
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error": {"code": 403, "message": "The caller does not have permission"}}"#;
        assert_eq!(api_error_message(body), "The caller does not have permission");
        assert_eq!(api_error_message("plain text "), "plain text");
    }
}
