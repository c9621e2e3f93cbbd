//! Stripe service configuration

use std::collections::HashMap;

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::stripe::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Stripe service configuration
///
/// The top-level `api_key` is the default account. Additional accounts are
/// registered under `aliases` and selected with the `service_alias` option.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeServiceConfig {
    /// Default account API key
    pub api_key: Option<String>,

    /// Stripe API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Alternate accounts keyed by alias
    #[serde(default)]
    pub aliases: HashMap<String, StripeAccountConfig>,
}

/// One aliased Stripe account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StripeAccountConfig {
    pub api_key: String,
}

impl StripeServiceConfig {
    /// Validate Stripe configuration
    ///
    /// An entirely unconfigured service is valid here; the keychain reports
    /// it when a task actually asks for it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.api_key {
            validate_key(key)?;
        }
        for account in self.aliases.values() {
            validate_key(&account.api_key)?;
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }

        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidApiBaseUrl);
        }

        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), ValidationError> {
    // Secret (sk_) or restricted (rk_) keys only; publishable keys cannot manage webhooks
    if key.starts_with("sk_") || key.starts_with("rk_") {
        Ok(())
    } else {
        Err(ValidationError::InvalidStripeKey)
    }
}

impl Default for StripeServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            aliases: HashMap::new(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StripeServiceConfig::default();
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_accepts_restricted_key() {
        let config = StripeServiceConfig {
            api_key: Some("rk_live_xxx".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_publishable_key() {
        let config = StripeServiceConfig {
            api_key: Some("pk_test_xxx".to_string()), // Wrong prefix
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidStripeKey)));
    }

    #[test]
    fn test_validation_checks_alias_keys() {
        let mut config = StripeServiceConfig {
            api_key: Some("sk_test_xxx".to_string()),
            ..Default::default()
        };
        config.aliases.insert(
            "staging".to_string(),
            StripeAccountConfig {
                api_key: "whsec_wrong".to_string(),
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = StripeServiceConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }

    #[test]
    fn test_validation_rejects_non_http_base_url() {
        let config = StripeServiceConfig {
            api_base_url: "ftp://api.stripe.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidApiBaseUrl)));
    }
}
