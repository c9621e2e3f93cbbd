//! Webhook endpoint value types.
//!
//! The endpoint itself lives on the payment provider. These types only carry
//! the fields the tasks observe: the identifier, the target URL used as the
//! matching key, and the subscribed events.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Maximum number of endpoints fetched by a single listing call.
///
/// Only the first page is inspected; endpoints beyond it are not considered
/// when checking for duplicates or looking up a delete target.
pub const LIST_PAGE_LIMIT: u8 = 100;

/// Webhook endpoint as returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    /// Provider-assigned endpoint ID (we_...).
    pub id: String,

    /// Target URL events are delivered to.
    pub url: String,

    /// Event names the endpoint is subscribed to.
    #[serde(default)]
    pub enabled_events: Vec<String>,

    /// Provider status (`enabled` or `disabled`).
    #[serde(default)]
    pub status: Option<String>,
}

impl WebhookEndpoint {
    /// Returns true if this endpoint delivers to exactly `url`.
    pub fn targets(&self, url: &str) -> bool {
        self.url == url
    }
}

/// One page of endpoints in provider order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointPage {
    pub endpoints: Vec<WebhookEndpoint>,

    /// Provider reported more endpoints beyond this page.
    pub has_more: bool,
}

impl EndpointPage {
    /// First endpoint in list order that targets `url`.
    pub fn find_by_url(&self, url: &str) -> Option<&WebhookEndpoint> {
        self.endpoints.iter().find(|endpoint| endpoint.targets(url))
    }
}

/// Request to register a new endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEndpointRequest {
    pub url: String,

    /// Events in the order they were configured.
    pub enabled_events: Vec<String>,

    /// Sent as the `Idempotency-Key` header when present.
    pub idempotency_key: Option<String>,
}

/// Endpoint returned by a successful create call.
///
/// The signing secret is only ever returned here; listing does not expose it.
#[derive(Debug, Clone)]
pub struct CreatedWebhookEndpoint {
    pub endpoint: WebhookEndpoint,
    pub secret: SecretString,
}
