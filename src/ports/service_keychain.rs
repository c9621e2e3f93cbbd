//! Service keychain port.
//!
//! Resolves stored credentials for a named service, optionally selecting an
//! alternate account by alias.

use secrecy::SecretString;
use thiserror::Error;

/// Port for credential lookup.
pub trait ServiceKeychain: Send + Sync {
    /// Get the credential registered for `service`, or for its `alias`.
    fn get_service(
        &self,
        service: &str,
        alias: Option<&str>,
    ) -> Result<ServiceCredential, KeychainError>;
}

/// Credential for one service account.
#[derive(Debug, Clone)]
pub struct ServiceCredential {
    pub service: String,
    pub alias: Option<String>,
    pub api_key: SecretString,
}

impl ServiceCredential {
    pub fn new(service: impl Into<String>, alias: Option<String>, api_key: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            alias,
            api_key: SecretString::new(api_key.into()),
        }
    }
}

/// Credential lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeychainError {
    #[error("Service '{0}' is not configured")]
    ServiceNotConfigured(String),

    #[error("Service '{service}' has no alias '{alias}'")]
    AliasNotConfigured { service: String, alias: String },

    #[error("Service '{0}' is configured without an API key")]
    MissingApiKey(String),
}
