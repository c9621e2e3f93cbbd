//! Stripe webhook endpoint client.
//!
//! Implements the `WebhookEndpointApi` port against the Stripe REST API
//! (`/v1/webhook_endpoints`).
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(api_key).with_timeout(Duration::from_secs(10));
//! let client = StripeWebhookClient::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::webhook::{
    CreateEndpointRequest, CreatedWebhookEndpoint, EndpointPage, WebhookEndpoint,
};
use crate::ports::{ServiceCredential, WebhookApiError, WebhookApiErrorCode, WebhookEndpointApi};

use super::api_types::{StripeDeletedObject, StripeErrorBody, StripeList, StripeWebhookEndpoint};

/// Default Stripe API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Stripe API configuration for one task invocation.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_..., sk_test_... or restricted rk_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// Per-request timeout.
    timeout: Duration,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_secret(SecretString::new(api_key.into()))
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Build from a resolved keychain credential.
    pub fn from_credential(credential: &ServiceCredential) -> Self {
        Self::from_secret(credential.api_key.clone())
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if the key is a test-mode key
    pub fn is_test_mode(&self) -> bool {
        let key = self.api_key.expose_secret();
        key.starts_with("sk_test_") || key.starts_with("rk_test_")
    }

    fn endpoints_url(&self) -> String {
        format!("{}/v1/webhook_endpoints", self.api_base_url)
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Stripe webhook endpoint client.
pub struct StripeWebhookClient {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeWebhookClient {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .timeout(self.config.timeout)
    }

    async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, WebhookApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "Stripe request failed");
            WebhookApiError::network(e.to_string())
        })?;

        if !response.status().is_success() {
            let error = error_from_response(response).await;
            tracing::error!(
                operation,
                status = ?error.status,
                code = %error.code,
                provider_code = ?error.provider_code,
                error = %error.message,
                "Stripe API error"
            );
            return Err(error);
        }

        Ok(response)
    }
}

/// Convert a non-success response into a `WebhookApiError`.
async fn error_from_response(response: reqwest::Response) -> WebhookApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    error_from_body(status, &body)
}

fn error_from_body(status: u16, body: &str) -> WebhookApiError {
    let code = WebhookApiErrorCode::from_status(status);

    match serde_json::from_str::<StripeErrorBody>(body) {
        Ok(parsed) => {
            let message = parsed
                .error
                .message
                .unwrap_or_else(|| format!("Stripe API error (HTTP {})", status));
            let mut error = WebhookApiError::new(code, message).with_status(status);
            if let Some(provider_code) = parsed.error.code.or(parsed.error.error_type) {
                error = error.with_provider_code(provider_code);
            }
            error
        }
        Err(_) => WebhookApiError::new(code, format!("Stripe API error (HTTP {}): {}", status, body))
            .with_status(status),
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, WebhookApiError> {
    response
        .json()
        .await
        .map_err(|e| WebhookApiError::provider(format!("Failed to parse Stripe response: {}", e)))
}

#[async_trait]
impl WebhookEndpointApi for StripeWebhookClient {
    async fn list_endpoints(&self, limit: u8) -> Result<EndpointPage, WebhookApiError> {
        let url = self.config.endpoints_url();
        let request = self
            .request(reqwest::Method::GET, &url)
            .query(&[("limit", limit.to_string())]);

        let response = self.send("list_endpoints", request).await?;
        let list: StripeList<StripeWebhookEndpoint> = parse_json(response).await?;

        tracing::debug!(count = list.data.len(), has_more = list.has_more, "Listed Stripe webhook endpoints");

        Ok(EndpointPage {
            endpoints: list.data.into_iter().map(WebhookEndpoint::from).collect(),
            has_more: list.has_more,
        })
    }

    async fn create_endpoint(
        &self,
        request: CreateEndpointRequest,
    ) -> Result<CreatedWebhookEndpoint, WebhookApiError> {
        let url = self.config.endpoints_url();

        let mut params = vec![("url".to_string(), request.url.clone())];
        for (i, event) in request.enabled_events.iter().enumerate() {
            params.push((format!("enabled_events[{}]", i), event.clone()));
        }

        let mut http_request = self.request(reqwest::Method::POST, &url).form(&params);
        if let Some(key) = &request.idempotency_key {
            http_request = http_request.header("Idempotency-Key", key);
        }

        let response = self.send("create_endpoint", http_request).await?;
        let mut created: StripeWebhookEndpoint = parse_json(response).await?;

        let secret = created
            .secret
            .take()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| WebhookApiError::provider("Stripe response did not include a signing secret"))?;

        Ok(CreatedWebhookEndpoint {
            endpoint: created.into(),
            secret: SecretString::new(secret),
        })
    }

    async fn delete_endpoint(&self, endpoint_id: &str) -> Result<(), WebhookApiError> {
        let url = format!("{}/{}", self.config.endpoints_url(), endpoint_id);

        let response = self
            .send("delete_endpoint", self.request(reqwest::Method::DELETE, &url))
            .await?;
        let deleted: StripeDeletedObject = parse_json(response).await?;

        if !deleted.deleted {
            return Err(WebhookApiError::provider(format!(
                "Stripe did not confirm deletion of {}",
                deleted.id
            )));
        }

        Ok(())
    }
}
