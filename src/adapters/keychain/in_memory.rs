//! In-memory keychain for tests and embedding.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::{KeychainError, ServiceCredential, ServiceKeychain};

/// Credentials registered at runtime, keyed by `(service, alias)`.
#[derive(Default)]
pub struct InMemoryKeychain {
    credentials: RwLock<HashMap<(String, Option<String>), String>>,
}

impl InMemoryKeychain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a credential for `service` (and optional `alias`).
    pub fn set_service(&self, service: &str, alias: Option<&str>, api_key: impl Into<String>) {
        self.credentials
            .write()
            .unwrap()
            .insert((service.to_string(), alias.map(str::to_string)), api_key.into());
    }

    pub fn with_service(self, service: &str, alias: Option<&str>, api_key: impl Into<String>) -> Self {
        self.set_service(service, alias, api_key);
        self
    }
}

impl ServiceKeychain for InMemoryKeychain {
    fn get_service(
        &self,
        service: &str,
        alias: Option<&str>,
    ) -> Result<ServiceCredential, KeychainError> {
        let credentials = self.credentials.read().unwrap();

        if let Some(key) = credentials.get(&(service.to_string(), alias.map(str::to_string))) {
            return Ok(ServiceCredential::new(service, alias.map(str::to_string), key.clone()));
        }

        match alias {
            Some(alias) if credentials.keys().any(|(s, _)| s == service) => {
                Err(KeychainError::AliasNotConfigured {
                    service: service.to_string(),
                    alias: alias.to_string(),
                })
            }
            _ => Err(KeychainError::ServiceNotConfigured(service.to_string())),
        }
    }
}
