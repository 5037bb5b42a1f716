//! Service-account credential resolution
//!
//! This module loads the Google service-account key either from a local file
//! (development) or from a secret store (production).

pub mod resolver;
pub mod store;

pub use resolver::{CredentialResolver, ServiceAccountCredentials, REQUIRED_CREDENTIAL_FIELDS};
pub use store::{EnvSecretStore, MemorySecretStore, SecretStore};
