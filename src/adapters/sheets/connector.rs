//! Session establishment
//!
//! A [`SheetsConnector`] turns configuration into an authenticated
//! [`SheetsApi`]. The client calls it lazily on first use and again after a
//! connection reset.

use super::api::SheetsApi;
use super::auth::{ServiceAccountTokenProvider, TokenProvider};
use super::google::GoogleSheetsApi;
use crate::adapters::credentials::CredentialResolver;
use crate::config::{Environment, GoogleSheetsConfig};
use crate::domain::{SheetsError, SheetsResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Establishes authenticated sessions
#[async_trait]
pub trait SheetsConnector: Send + Sync {
    /// Resolves credentials and authenticates
    ///
    /// # Errors
    ///
    /// `CredentialsNotFound` or `CredentialsMalformed` when credentials cannot
    /// be resolved, `AuthenticationFailed` for everything after that.
    async fn connect(&self) -> SheetsResult<Arc<dyn SheetsApi>>;
}

/// Connector for the real Google Sheets API
#[derive(Debug, Clone)]
pub struct GoogleConnector {
    environment: Environment,
    resolver: CredentialResolver,
    api_base_url: String,
    timeout_seconds: u64,
}

impl GoogleConnector {
    pub fn new(
        environment: Environment,
        resolver: CredentialResolver,
        api_base_url: impl Into<String>,
        timeout_seconds: u64,
    ) -> Self {
        Self {
            environment,
            resolver,
            api_base_url: api_base_url.into(),
            timeout_seconds,
        }
    }

    /// Connector using the configured credential sources
    pub fn from_config(environment: Environment, config: &GoogleSheetsConfig) -> Self {
        Self::new(
            environment,
            CredentialResolver::from_config(config),
            &config.api_base_url,
            config.timeout_seconds,
        )
    }
}

#[async_trait]
impl SheetsConnector for GoogleConnector {
    async fn connect(&self) -> SheetsResult<Arc<dyn SheetsApi>> {
        let credentials = self.resolver.resolve(self.environment)?;

        tracing::info!(
            environment = %self.environment,
            client_email = %credentials.client_email(),
            "Authenticating with Google Sheets"
        );

        let provider = ServiceAccountTokenProvider::new(&credentials).await?;

        // Fetch one token up front so bad keys surface at connect time
        provider.access_token().await.map_err(|e| match e {
            SheetsError::AuthenticationFailed(_) => e,
            other => SheetsError::AuthenticationFailed(other.to_string()),
        })?;

        let api = GoogleSheetsApi::new(&self.api_base_url, self.timeout_seconds, Arc::new(provider))?;

        tracing::info!(base_url = %api.base_url(), "Google Sheets session established");

        Ok(Arc::new(api))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::credentials::MemorySecretStore;

    #[tokio::test]
    async fn test_connect_without_credentials_fails() {
        let resolver = CredentialResolver::new(
            "/nonexistent/credentials.json",
            "GOOGLE_SHEETS_CREDENTIALS_JSON",
            Arc::new(MemorySecretStore::new()),
        );
        let connector = GoogleConnector::new(
            Environment::Development,
            resolver,
            "https://sheets.googleapis.com/v4",
            5,
        );

        let err = connector.connect().await.err().unwrap();
        assert!(matches!(err, SheetsError::CredentialsNotFound(_)));
    }

    #[tokio::test]
    async fn test_connect_with_malformed_secret_fails() {
        let resolver = CredentialResolver::new(
            "/nonexistent/credentials.json",
            "CREDS",
            Arc::new(MemorySecretStore::new().with_secret("CREDS", "{\"type\": \"service_account\"}")),
        );
        let connector = GoogleConnector::new(
            Environment::Production,
            resolver,
            "https://sheets.googleapis.com/v4",
            5,
        );

        let err = connector.connect().await.err().unwrap();
        assert!(matches!(err, SheetsError::CredentialsMalformed(_)));
    }
}
