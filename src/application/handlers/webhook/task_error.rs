//! Webhook task errors.
//!
//! Every variant is fatal to the task run; nothing is retried.

use thiserror::Error;

use crate::domain::webhook::OptionError;
use crate::ports::{KeychainError, WebhookApiError};

#[derive(Debug, Error)]
pub enum TaskError {
    /// Credential lookup failed for the requested service or alias.
    #[error("Stripe service configuration error: {0}")]
    Configuration(#[from] KeychainError),

    /// An endpoint for the URL already exists.
    #[error("Stripe webhook already exists for url {url}")]
    DuplicateResource { url: String },

    /// No endpoint targets the URL and missing endpoints are not ignored.
    #[error("No Stripe webhook endpoint with target url={url} found")]
    MissingResource { url: String },

    /// The remote API call failed; carries the provider error unchanged.
    #[error("Stripe API request failed: {0}")]
    RemoteService(#[from] WebhookApiError),

    #[error(transparent)]
    InvalidOption(#[from] OptionError),
}

impl TaskError {
    pub fn duplicate_resource(url: impl Into<String>) -> Self {
        TaskError::DuplicateResource { url: url.into() }
    }

    pub fn missing_resource(url: impl Into<String>) -> Self {
        TaskError::MissingResource { url: url.into() }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskError::Configuration(_) => "configuration",
            TaskError::DuplicateResource { .. } => "duplicate_resource",
            TaskError::MissingResource { .. } => "missing_resource",
            TaskError::RemoteService(_) => "remote_service",
            TaskError::InvalidOption(_) => "invalid_option",
        }
    }
}
