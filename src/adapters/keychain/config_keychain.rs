//! Keychain backed by application configuration.

use std::collections::HashMap;

use crate::config::AppConfig;
use crate::ports::{KeychainError, ServiceCredential, ServiceKeychain};

/// Service name of the Stripe account section.
pub const STRIPE_SERVICE: &str = "stripe";

/// Resolves credentials from the `stripe` section of [`AppConfig`].
///
/// Aliases are matched case-insensitively, since environment variable names
/// are lowercased when loaded.
#[derive(Clone)]
pub struct ConfigKeychain {
    default_key: Option<String>,
    aliases: HashMap<String, String>,
}

impl ConfigKeychain {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            default_key: config.stripe.api_key.clone().filter(|k| !k.is_empty()),
            aliases: config
                .stripe
                .aliases
                .iter()
                .map(|(alias, account)| (alias.to_lowercase(), account.api_key.clone()))
                .collect(),
        }
    }
}

impl ServiceKeychain for ConfigKeychain {
    fn get_service(
        &self,
        service: &str,
        alias: Option<&str>,
    ) -> Result<ServiceCredential, KeychainError> {
        if service != STRIPE_SERVICE {
            return Err(KeychainError::ServiceNotConfigured(service.to_string()));
        }

        match alias {
            Some(alias) => self
                .aliases
                .get(&alias.to_lowercase())
                .filter(|key| !key.is_empty())
                .map(|key| ServiceCredential::new(service, Some(alias.to_string()), key.clone()))
                .ok_or_else(|| KeychainError::AliasNotConfigured {
                    service: service.to_string(),
                    alias: alias.to_string(),
                }),
            None => self
                .default_key
                .as_ref()
                .map(|key| ServiceCredential::new(service, None, key.clone()))
                .ok_or_else(|| KeychainError::ServiceNotConfigured(service.to_string())),
        }
    }
}
