//! OAuth2 access tokens for the Sheets API
//!
//! The service-account flow signs a JWT with the private key and exchanges it
//! for a bearer token. `yup-oauth2` caches and refreshes tokens internally, so
//! calling [`TokenProvider::access_token`] per request is cheap.

use crate::adapters::credentials::ServiceAccountCredentials;
use crate::domain::{SheetsError, SheetsResult};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use yup_oauth2::ServiceAccountAuthenticator;

/// Read-only spreadsheets scope; the only scope this crate requests
pub const SPREADSHEETS_READONLY_SCOPE: &str =
    "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Source of bearer tokens for API requests
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a valid access token, refreshing it if needed
    async fn access_token(&self) -> SheetsResult<String>;
}

type TokenFuture = Pin<Box<dyn Future<Output = SheetsResult<String>> + Send>>;
type TokenFn = Arc<dyn Fn() -> TokenFuture + Send + Sync>;

/// Token provider backed by a `yup-oauth2` service-account authenticator
pub struct ServiceAccountTokenProvider {
    client_email: String,
    fetch: TokenFn,
}

impl ServiceAccountTokenProvider {
    /// Builds an authenticator from resolved credentials
    ///
    /// No network traffic happens here; the first token is fetched on the
    /// first call to [`TokenProvider::access_token`].
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the key cannot be parsed or the
    /// authenticator cannot be built.
    pub async fn new(credentials: &ServiceAccountCredentials) -> SheetsResult<Self> {
        let key = yup_oauth2::parse_service_account_key(
            credentials.raw_json().expose_secret().as_str(),
        )
        .map_err(|e| {
            SheetsError::AuthenticationFailed(format!("invalid service-account key: {e}"))
        })?;

        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| {
                SheetsError::AuthenticationFailed(format!("failed to build authenticator: {e}"))
            })?;
        let authenticator = Arc::new(authenticator);

        let fetch: TokenFn = Arc::new(move || {
            let authenticator = Arc::clone(&authenticator);
            Box::pin(async move {
                let token = authenticator
                    .token(&[SPREADSHEETS_READONLY_SCOPE])
                    .await
                    .map_err(|e| {
                        SheetsError::AuthenticationFailed(format!("token exchange failed: {e}"))
                    })?;

                token.token().map(str::to_string).ok_or_else(|| {
                    SheetsError::AuthenticationFailed(
                        "token response did not contain an access token".to_string(),
                    )
                })
            })
        });

        Ok(Self {
            client_email: credentials.client_email().to_string(),
            fetch,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> SheetsResult<String> {
        (self.fetch)().await
    }
}

impl std::fmt::Debug for ServiceAccountTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountTokenProvider")
            .field("client_email", &self.client_email)
            .finish_non_exhaustive()
    }
}

/// Fixed token, for local emulators and tests
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> SheetsResult<String> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token_provider() {
        let provider = StaticTokenProvider::new("abc123");
        assert_eq!(provider.access_token().await.unwrap(), "abc123");
    }

    #[tokio::test]
    async fn test_unparsable_private_key_fails_authentication() {
        let json = r#"{
            "type": "service_account",
            "project_id": "p",
            "private_key": "not a pem key",
            "client_email": "svc@p.iam.gserviceaccount.com",
            "token_uri": "https://oauth2.googleapis.com/token"
        }"#;
        let creds = ServiceAccountCredentials::from_json(json).unwrap();

        let result = match ServiceAccountTokenProvider::new(&creds).await {
            Ok(provider) => provider.access_token().await.map(|_| ()),
            Err(e) => Err(e),
        };

        assert!(matches!(result, Err(SheetsError::AuthenticationFailed(_))));
    }
}
