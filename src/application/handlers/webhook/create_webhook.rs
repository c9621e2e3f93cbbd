//! CreateWebhookHandler - Command handler for registering a webhook endpoint.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::webhook::{CreateEndpointRequest, CreateWebhookOptions, WebhookEndpoint};
use crate::ports::WebhookEndpointApi;

use super::stripe_task::list_first_page;
use super::TaskError;

/// Command to create a webhook endpoint.
#[derive(Debug, Clone)]
pub struct CreateWebhookCommand {
    pub url: String,
    pub events: Vec<String>,
}

impl From<&CreateWebhookOptions> for CreateWebhookCommand {
    fn from(options: &CreateWebhookOptions) -> Self {
        Self {
            url: options.url.clone(),
            events: options.events.clone(),
        }
    }
}

/// Result of a successful create.
#[derive(Debug, Clone)]
pub struct CreateWebhookResult {
    pub endpoint: WebhookEndpoint,

    /// Signing secret; only returned at creation time.
    pub secret: SecretString,
}

impl CreateWebhookResult {
    /// Named task return values (`secret`).
    pub fn return_values(&self) -> serde_json::Value {
        serde_json::json!({ "secret": self.secret.expose_secret() })
    }
}

/// Handler for creating webhook endpoints.
///
/// Rejects a URL that already has an endpoint on the first listing page.
/// The check and the create are separate calls, so an endpoint created
/// concurrently by someone else is not detected.
pub struct CreateWebhookHandler {
    api: Arc<dyn WebhookEndpointApi>,
}

impl CreateWebhookHandler {
    pub fn new(api: Arc<dyn WebhookEndpointApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: CreateWebhookCommand) -> Result<CreateWebhookResult, TaskError> {
        // 1. Reject duplicates
        let page = list_first_page(self.api.as_ref()).await?;
        if let Some(existing) = page.find_by_url(&cmd.url) {
            tracing::debug!(endpoint_id = %existing.id, url = %cmd.url, "Found existing endpoint");
            return Err(TaskError::duplicate_resource(cmd.url));
        }

        // 2. Create, with an idempotency key so a replayed request is not a second endpoint
        let request = CreateEndpointRequest {
            url: cmd.url.clone(),
            enabled_events: cmd.events,
            idempotency_key: Some(uuid::Uuid::new_v4().to_string()),
        };
        let created = self.api.create_endpoint(request).await?;

        tracing::info!(
            endpoint_id = %created.endpoint.id,
            url = %cmd.url,
            "Created Stripe webhook endpoint for url {}",
            cmd.url
        );

        Ok(CreateWebhookResult {
            endpoint: created.endpoint,
            secret: created.secret,
        })
    }
}
