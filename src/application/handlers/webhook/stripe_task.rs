//! StripeTaskContext - per-invocation Stripe client setup shared by the tasks.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::keychain::STRIPE_SERVICE;
use crate::adapters::stripe::{StripeConfig, StripeWebhookClient};
use crate::config::StripeServiceConfig;
use crate::domain::webhook::{EndpointPage, StripeTaskOptions, LIST_PAGE_LIMIT};
use crate::ports::{ServiceKeychain, WebhookEndpointApi};

use super::TaskError;

/// Stripe client scoped to one task invocation.
///
/// The credential is resolved once and owned by the client instance; no
/// process-wide API key is set.
#[derive(Clone)]
pub struct StripeTaskContext {
    api: Arc<dyn WebhookEndpointApi>,
}

impl StripeTaskContext {
    /// Resolve the `stripe` credential (optionally by alias) and build a client.
    pub fn connect(
        keychain: &dyn ServiceKeychain,
        options: &StripeTaskOptions,
        settings: &StripeServiceConfig,
    ) -> Result<Self, TaskError> {
        let alias = options.service_alias.as_deref();
        let credential = keychain.get_service(STRIPE_SERVICE, alias)?;

        let config = StripeConfig::from_credential(&credential)
            .with_base_url(settings.api_base_url.clone())
            .with_timeout(Duration::from_secs(settings.timeout_secs));

        tracing::info!(
            service = STRIPE_SERVICE,
            alias = ?alias,
            test_mode = config.is_test_mode(),
            api_base_url = %settings.api_base_url,
            "Resolved Stripe credential"
        );

        Ok(Self::from_api(Arc::new(StripeWebhookClient::new(config))))
    }

    /// Use an already constructed API (tests, alternative providers).
    pub fn from_api(api: Arc<dyn WebhookEndpointApi>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> Arc<dyn WebhookEndpointApi> {
        Arc::clone(&self.api)
    }
}

/// Fetch the first page of endpoints, warning when it was truncated.
pub(crate) async fn list_first_page(api: &dyn WebhookEndpointApi) -> Result<EndpointPage, TaskError> {
    let page = api.list_endpoints(LIST_PAGE_LIMIT).await?;

    if page.has_more {
        tracing::warn!(
            limit = LIST_PAGE_LIMIT,
            "More Stripe webhook endpoints exist than were listed; only the first page was checked"
        );
    }

    Ok(page)
}
