//! Mock webhook endpoint API for testing.
//!
//! Keeps endpoints in memory and supports:
//! - Pre-seeded endpoints
//! - Error injection
//! - Call tracking

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::webhook::{
    CreateEndpointRequest, CreatedWebhookEndpoint, EndpointPage, WebhookEndpoint,
};
use crate::ports::{WebhookApiError, WebhookApiErrorCode, WebhookEndpointApi};

/// Mock webhook endpoint API.
///
/// # Example
///
/// ```ignore
/// let mock = MockWebhookEndpointApi::with_endpoints(vec![endpoint]);
/// mock.set_next_secret("whsec_fixed");
///
/// let handler = CreateWebhookHandler::new(Arc::new(mock.clone()));
/// assert_eq!(mock.call_count("create_endpoint"), 1);
/// ```
#[derive(Default)]
pub struct MockWebhookEndpointApi {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Endpoints in list order.
    endpoints: Vec<WebhookEndpoint>,

    /// Reported `has_more` on listings.
    has_more: bool,

    /// Secret to return on next create.
    next_secret: Option<String>,

    /// Error to return on next call (consumed).
    next_error: Option<WebhookApiError>,

    /// Errors by method name.
    method_errors: HashMap<String, WebhookApiError>,

    call_log: Vec<MethodCall>,

    /// Requests received by `create_endpoint`.
    create_requests: Vec<CreateEndpointRequest>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockWebhookEndpointApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(endpoints: Vec<WebhookEndpoint>) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().endpoints = endpoints;
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Report more endpoints beyond the first page.
    pub fn set_has_more(&self, has_more: bool) {
        self.inner.lock().unwrap().has_more = has_more;
    }

    pub fn set_next_secret(&self, secret: impl Into<String>) {
        self.inner.lock().unwrap().next_secret = Some(secret.into());
    }

    /// Set an error to return on the next call to any method.
    pub fn set_error(&self, error: WebhookApiError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    pub fn set_method_error(&self, method: &str, error: WebhookApiError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    pub fn was_called(&self, method: &str) -> bool {
        self.call_count(method) > 0
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    pub fn create_requests(&self) -> Vec<CreateEndpointRequest> {
        self.inner.lock().unwrap().create_requests.clone()
    }

    /// Endpoints currently held by the mock.
    pub fn endpoints(&self) -> Vec<WebhookEndpoint> {
        self.inner.lock().unwrap().endpoints.clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record_call(&self, method: &str, args: Vec<String>) {
        self.inner.lock().unwrap().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
    }

    fn check_error(&self, method: &str) -> Result<(), WebhookApiError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.method_errors.get(method) {
            return Err(error.clone());
        }

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        Ok(())
    }
}

impl Clone for MockWebhookEndpointApi {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl WebhookEndpointApi for MockWebhookEndpointApi {
    async fn list_endpoints(&self, limit: u8) -> Result<EndpointPage, WebhookApiError> {
        self.record_call("list_endpoints", vec![limit.to_string()]);
        self.check_error("list_endpoints")?;

        let state = self.inner.lock().unwrap();
        let limit = usize::from(limit);

        Ok(EndpointPage {
            endpoints: state.endpoints.iter().take(limit).cloned().collect(),
            has_more: state.has_more || state.endpoints.len() > limit,
        })
    }

    async fn create_endpoint(
        &self,
        request: CreateEndpointRequest,
    ) -> Result<CreatedWebhookEndpoint, WebhookApiError> {
        self.record_call(
            "create_endpoint",
            vec![request.url.clone(), request.enabled_events.join(",")],
        );
        self.check_error("create_endpoint")?;

        let mut state = self.inner.lock().unwrap();
        state.create_requests.push(request.clone());

        let short_id = uuid::Uuid::new_v4().simple().to_string()[..12].to_string();
        let endpoint = WebhookEndpoint {
            id: format!("we_mock_{}", short_id),
            url: request.url,
            enabled_events: request.enabled_events,
            status: Some("enabled".to_string()),
        };
        state.endpoints.push(endpoint.clone());

        let secret = state
            .next_secret
            .take()
            .unwrap_or_else(|| format!("whsec_mock_{}", short_id));

        Ok(CreatedWebhookEndpoint {
            endpoint,
            secret: SecretString::new(secret),
        })
    }

    async fn delete_endpoint(&self, endpoint_id: &str) -> Result<(), WebhookApiError> {
        self.record_call("delete_endpoint", vec![endpoint_id.to_string()]);
        self.check_error("delete_endpoint")?;

        let mut state = self.inner.lock().unwrap();
        let position = state
            .endpoints
            .iter()
            .position(|e| e.id == endpoint_id)
            .ok_or_else(|| {
                WebhookApiError::new(
                    WebhookApiErrorCode::NotFound,
                    format!("No such webhook endpoint: '{}'", endpoint_id),
                )
                .with_status(404)
            })?;
        state.endpoints.remove(position);

        Ok(())
    }
}
