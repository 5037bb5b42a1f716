//! Secret stores for production credentials
//!
//! Deployments inject the service-account JSON as a secret. [`EnvSecretStore`]
//! reads it from the process environment; [`MemorySecretStore`] holds secrets
//! handed over programmatically.

use crate::config::{secret_string, SecretString};
use std::collections::HashMap;

/// Process-wide source of named secrets
pub trait SecretStore: Send + Sync {
    /// Returns the secret stored under `key`, if any
    fn get(&self, key: &str) -> Option<SecretString>;
}

/// Reads secrets from environment variables
///
/// Empty variables count as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn get(&self, key: &str) -> Option<SecretString> {
        std::env::var(key)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(secret_string)
    }
}

/// In-memory secret store
#[derive(Debug, Default, Clone)]
pub struct MemorySecretStore {
    secrets: HashMap<String, SecretString>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret
    pub fn with_secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), secret_string(value.into()));
        self
    }
}

impl SecretStore for MemorySecretStore {
    fn get(&self, key: &str) -> Option<SecretString> {
        self.secrets.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_memory_store_lookup() {
        let store = MemorySecretStore::new().with_secret("creds", "{}");
        assert_eq!(store.get("creds").unwrap().expose_secret().as_str(), "{}");
        assert!(store.get("other").is_none());
    }

    #[test]
    fn test_env_store_ignores_blank_values() {
        std::env::set_var("SHEETDASH_STORE_TEST_BLANK", "  ");
        assert!(EnvSecretStore.get("SHEETDASH_STORE_TEST_BLANK").is_none());
        std::env::remove_var("SHEETDASH_STORE_TEST_BLANK");
        assert!(EnvSecretStore.get("SHEETDASH_STORE_TEST_BLANK").is_none());
    }
}
