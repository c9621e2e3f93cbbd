//! DeleteWebhookHandler - Command handler for removing a webhook endpoint.

use std::sync::Arc;

use crate::domain::webhook::DeleteWebhookOptions;
use crate::ports::WebhookEndpointApi;

use super::stripe_task::list_first_page;
use super::TaskError;

/// Command to delete the endpoint targeting `url`.
#[derive(Debug, Clone)]
pub struct DeleteWebhookCommand {
    pub url: String,
    pub ignore_missing: bool,
}

impl From<&DeleteWebhookOptions> for DeleteWebhookCommand {
    fn from(options: &DeleteWebhookOptions) -> Self {
        Self {
            url: options.url.clone(),
            ignore_missing: options.ignore_missing,
        }
    }
}

/// Outcome of a successful delete run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteWebhookOutcome {
    /// The first matching endpoint was deleted.
    Deleted { endpoint_id: String },

    /// Nothing matched and `ignore_missing` was set.
    NotFoundIgnored,
}

/// Handler for deleting webhook endpoints.
///
/// Deletes at most one endpoint: the first match in list order. Further
/// endpoints with the same URL are left untouched.
pub struct DeleteWebhookHandler {
    api: Arc<dyn WebhookEndpointApi>,
}

impl DeleteWebhookHandler {
    pub fn new(api: Arc<dyn WebhookEndpointApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, cmd: DeleteWebhookCommand) -> Result<DeleteWebhookOutcome, TaskError> {
        let page = list_first_page(self.api.as_ref()).await?;

        if let Some(endpoint) = page.find_by_url(&cmd.url) {
            self.api.delete_endpoint(&endpoint.id).await?;
            tracing::info!(
                endpoint_id = %endpoint.id,
                url = %cmd.url,
                "Deleted Stripe webhook endpoint with id {}",
                endpoint.id
            );
            return Ok(DeleteWebhookOutcome::Deleted {
                endpoint_id: endpoint.id.clone(),
            });
        }

        if !cmd.ignore_missing {
            return Err(TaskError::missing_resource(cmd.url));
        }

        tracing::info!(
            url = %cmd.url,
            "Webhook endpoint not found, ignoring because ignore_missing is True"
        );
        Ok(DeleteWebhookOutcome::NotFoundIgnored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::stripe::MockWebhookEndpointApi;
    use crate::application::handlers::webhook::test_support::CapturedLogs;
    use crate::domain::webhook::WebhookEndpoint;
    use crate::ports::{WebhookApiError, WebhookApiErrorCode};
    use proptest::prelude::*;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn endpoint(id: &str, url: &str) -> WebhookEndpoint {
        WebhookEndpoint {
            id: id.to_string(),
            url: url.to_string(),
            enabled_events: vec!["*".to_string()],
            status: Some("enabled".to_string()),
        }
    }

    fn command(url: &str, ignore_missing: bool) -> DeleteWebhookCommand {
        DeleteWebhookCommand {
            url: url.to_string(),
            ignore_missing,
        }
    }

    fn handler_for(mock: &MockWebhookEndpointApi) -> DeleteWebhookHandler {
        DeleteWebhookHandler::new(Arc::new(mock.clone()))
    }

    fn delete_args(mock: &MockWebhookEndpointApi) -> Vec<String> {
        mock.calls()
            .into_iter()
            .filter(|c| c.method == "delete_endpoint")
            .flat_map(|c| c.args)
            .collect()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn deletes_matching_endpoint_by_id() {
        let mock = MockWebhookEndpointApi::with_endpoints(vec![endpoint("we_9", "https://c.example/hook")]);

        let outcome = handler_for(&mock)
            .handle(command("https://c.example/hook", false))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            DeleteWebhookOutcome::Deleted {
                endpoint_id: "we_9".to_string()
            }
        );
        assert_eq!(delete_args(&mock), vec!["we_9"]);
        assert!(mock.endpoints().is_empty());
    }

    #[tokio::test]
    async fn deletes_only_first_of_duplicates() {
        let mock = MockWebhookEndpointApi::with_endpoints(vec![
            endpoint("we_1", "https://other.example/hook"),
            endpoint("we_2", "https://dup.example/hook"),
            endpoint("we_3", "https://dup.example/hook"),
        ]);

        handler_for(&mock)
            .handle(command("https://dup.example/hook", false))
            .await
            .unwrap();

        assert_eq!(delete_args(&mock), vec!["we_2"]);
        let remaining: Vec<String> = mock.endpoints().into_iter().map(|e| e.id).collect();
        assert_eq!(remaining, vec!["we_1", "we_3"]);
    }

    #[tokio::test]
    async fn ignores_missing_when_configured() {
        let mock = MockWebhookEndpointApi::new();

        let outcome = handler_for(&mock)
            .handle(command("https://z.example/hook", true))
            .await
            .unwrap();

        assert_eq!(outcome, DeleteWebhookOutcome::NotFoundIgnored);
        assert!(!mock.was_called("delete_endpoint"));
    }

    #[tokio::test]
    async fn ignored_missing_is_logged() {
        let (logs, _guard) = CapturedLogs::install();
        let mock = MockWebhookEndpointApi::new();

        handler_for(&mock)
            .handle(command("https://z.example/hook", true))
            .await
            .unwrap();

        assert!(logs.contains("INFO"));
        assert!(logs.contains("Webhook endpoint not found, ignoring because ignore_missing is True"));
        assert!(logs.contains("https://z.example/hook"));
    }

    #[tokio::test]
    async fn logs_deleted_endpoint_id() {
        let (logs, _guard) = CapturedLogs::install();
        let mock = MockWebhookEndpointApi::with_endpoints(vec![endpoint("we_9", "https://c.example/hook")]);

        handler_for(&mock)
            .handle(command("https://c.example/hook", false))
            .await
            .unwrap();

        assert!(logs.contains("Deleted Stripe webhook endpoint with id we_9"));
    }

    #[tokio::test]
    async fn ignore_missing_still_deletes_when_present() {
        let mock = MockWebhookEndpointApi::with_endpoints(vec![endpoint("we_9", "https://c.example/hook")]);

        let outcome = handler_for(&mock)
            .handle(command("https://c.example/hook", true))
            .await
            .unwrap();

        assert!(matches!(outcome, DeleteWebhookOutcome::Deleted { .. }));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_when_missing_by_default() {
        let mock = MockWebhookEndpointApi::with_endpoints(vec![endpoint("we_1", "https://a.example/hook")]);

        let err = handler_for(&mock)
            .handle(command("https://z.example/hook", false))
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::MissingResource { .. }));
        assert_eq!(
            err.to_string(),
            "No Stripe webhook endpoint with target url=https://z.example/hook found"
        );
        assert!(!mock.was_called("delete_endpoint"));
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let mock = MockWebhookEndpointApi::new();
        mock.set_error(WebhookApiError::network("connection reset by peer"));

        let err = handler_for(&mock)
            .handle(command("https://z.example/hook", true))
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::RemoteService(_)));
    }

    #[tokio::test]
    async fn delete_failure_propagates_without_retry() {
        let mock = MockWebhookEndpointApi::with_endpoints(vec![endpoint("we_9", "https://c.example/hook")]);
        mock.set_method_error(
            "delete_endpoint",
            WebhookApiError::new(WebhookApiErrorCode::RateLimitExceeded, "Too many requests"),
        );

        let err = handler_for(&mock)
            .handle(command("https://c.example/hook", false))
            .await
            .unwrap_err();

        match err {
            TaskError::RemoteService(inner) => {
                assert_eq!(inner.code, WebhookApiErrorCode::RateLimitExceeded)
            }
            other => panic!("Expected RemoteService, got {:?}", other),
        }
        assert_eq!(mock.call_count("delete_endpoint"), 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread().build().unwrap()
    }

    proptest! {
        #[test]
        fn present_url_deletes_exactly_the_matching_id(
            hosts in proptest::collection::hash_set("[a-z]{1,8}", 1..10),
            pick in any::<proptest::sample::Index>(),
        ) {
            let endpoints: Vec<WebhookEndpoint> = hosts
                .iter()
                .enumerate()
                .map(|(i, host)| endpoint(&format!("we_{}", i), &format!("https://{}.example/hook", host)))
                .collect();
            let target = pick.get(&endpoints).clone();
            let mock = MockWebhookEndpointApi::with_endpoints(endpoints);

            let result = runtime().block_on(handler_for(&mock).handle(command(&target.url, false)));

            prop_assert!(result.is_ok());
            prop_assert_eq!(delete_args(&mock), vec![target.id]);
        }

        #[test]
        fn absent_url_fails_or_is_ignored(
            hosts in proptest::collection::vec("[a-z]{1,8}", 0..10),
            ignore_missing in any::<bool>(),
        ) {
            let endpoints = hosts
                .iter()
                .enumerate()
                .map(|(i, host)| endpoint(&format!("we_{}", i), &format!("https://{}.example/hook", host)))
                .collect();
            let mock = MockWebhookEndpointApi::with_endpoints(endpoints);

            let result = runtime().block_on(
                handler_for(&mock).handle(command("https://absent.example/other", ignore_missing)),
            );

            if ignore_missing {
                prop_assert_eq!(result.unwrap(), DeleteWebhookOutcome::NotFoundIgnored);
            } else {
                let is_missing = matches!(result, Err(TaskError::MissingResource { .. }));
                prop_assert!(is_missing);
            }
            prop_assert!(!mock.was_called("delete_endpoint"));
        }
    }
}
