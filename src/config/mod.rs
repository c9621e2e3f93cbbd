//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `STRIPE_TASKS` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use stripe_webhook_tasks::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod stripe;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use stripe::{StripeAccountConfig, StripeServiceConfig};

use std::path::Path;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "STRIPE_TASKS";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stripe accounts and API settings
    #[serde(default)]
    pub stripe: StripeServiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` from the working directory if present, then reads
    /// variables with the `STRIPE_TASKS` prefix.
    ///
    /// # Environment Variable Format
    ///
    /// - `STRIPE_TASKS__STRIPE__API_KEY=sk_test_...` -> `stripe.api_key`
    /// - `STRIPE_TASKS__STRIPE__ALIASES__STAGING__API_KEY=...` -> `stripe.aliases.staging.api_key`
    /// - `STRIPE_TASKS__LOGGING__FORMAT=json` -> `logging.format`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration, reading variables from `env_file` first
    ///
    /// Unlike [`AppConfig::load()`], a missing or unreadable file is an error.
    pub fn load_with_env_file(env_file: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(env_file)?;
        Self::from_env()
    }

    fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.stripe.validate()?;
        Ok(())
    }
}
