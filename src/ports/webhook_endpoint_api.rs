//! Webhook endpoint API port.
//!
//! Defines the three remote operations the webhook tasks need from a payment
//! provider: list, create and delete webhook endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::webhook::{CreateEndpointRequest, CreatedWebhookEndpoint, EndpointPage};

/// Port for managing webhook endpoints on a payment provider.
#[async_trait]
pub trait WebhookEndpointApi: Send + Sync {
    /// List up to `limit` endpoints, first page only.
    async fn list_endpoints(&self, limit: u8) -> Result<EndpointPage, WebhookApiError>;

    /// Register a new endpoint.
    ///
    /// The returned value carries the signing secret, which cannot be
    /// retrieved again later.
    async fn create_endpoint(
        &self,
        request: CreateEndpointRequest,
    ) -> Result<CreatedWebhookEndpoint, WebhookApiError>;

    /// Delete an endpoint by provider ID.
    async fn delete_endpoint(&self, endpoint_id: &str) -> Result<(), WebhookApiError>;
}

/// Errors from webhook endpoint API calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookApiError {
    /// Error code for categorization.
    pub code: WebhookApiErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// HTTP status returned by the provider (if any).
    pub status: Option<u16>,
}

impl WebhookApiError {
    pub fn new(code: WebhookApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            status: None,
        }
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(WebhookApiErrorCode::NetworkError, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(WebhookApiErrorCode::AuthenticationError, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(WebhookApiErrorCode::ProviderError, message)
    }

    /// Whether a caller could reasonably retry. Nothing in this crate does.
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }
}

impl std::fmt::Display for WebhookApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for WebhookApiError {}

/// Webhook API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookApiErrorCode {
    /// Network connectivity issue or timeout.
    NetworkError,

    /// API key rejected.
    AuthenticationError,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Request rejected by the provider (bad URL, unknown event, ...).
    InvalidRequest,

    /// Resource not found.
    NotFound,

    /// Provider-side failure or unreadable response.
    ProviderError,
}

impl WebhookApiErrorCode {
    /// Map an HTTP error status to a code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => WebhookApiErrorCode::AuthenticationError,
            404 => WebhookApiErrorCode::NotFound,
            429 => WebhookApiErrorCode::RateLimitExceeded,
            400..=499 => WebhookApiErrorCode::InvalidRequest,
            _ => WebhookApiErrorCode::ProviderError,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WebhookApiErrorCode::NetworkError | WebhookApiErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for WebhookApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WebhookApiErrorCode::NetworkError => "network_error",
            WebhookApiErrorCode::AuthenticationError => "authentication_error",
            WebhookApiErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            WebhookApiErrorCode::InvalidRequest => "invalid_request",
            WebhookApiErrorCode::NotFound => "not_found",
            WebhookApiErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
