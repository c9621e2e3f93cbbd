//! Stripe webhook endpoint adapter.
//!
//! Implements the `WebhookEndpointApi` port for Stripe:
//! - Listing webhook endpoints (first page only)
//! - Creating endpoints, returning the one-time signing secret
//! - Deleting endpoints by ID
//!
//! # Security
//!
//! - API keys and signing secrets are held as `secrecy::SecretString`
//! - `StripeConfig` redacts the key in its `Debug` output

mod api_types;
mod mock_webhook_endpoint_api;
mod webhook_endpoint_client;

pub use api_types::{StripeDeletedObject, StripeErrorBody, StripeList, StripeWebhookEndpoint};
pub use mock_webhook_endpoint_api::{MethodCall, MockWebhookEndpointApi};
pub use webhook_endpoint_client::{
    StripeConfig, StripeWebhookClient, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS,
};
