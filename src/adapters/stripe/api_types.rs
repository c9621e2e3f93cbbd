//! Stripe API response bodies.
//!
//! Only the fields the webhook tasks read are modeled; everything else in the
//! Stripe payload is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::webhook::WebhookEndpoint;

/// Stripe list envelope (`"object": "list"`).
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    pub data: Vec<T>,

    #[serde(default)]
    pub has_more: bool,
}

/// Stripe `webhook_endpoint` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeWebhookEndpoint {
    pub id: String,

    pub url: String,

    #[serde(default)]
    pub enabled_events: Vec<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Only present in the create response.
    #[serde(default)]
    pub secret: Option<String>,
}

impl From<StripeWebhookEndpoint> for WebhookEndpoint {
    fn from(endpoint: StripeWebhookEndpoint) -> Self {
        WebhookEndpoint {
            id: endpoint.id,
            url: endpoint.url,
            enabled_events: endpoint.enabled_events,
            status: endpoint.status,
        }
    }
}

/// Response to `DELETE /v1/webhook_endpoints/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeDeletedObject {
    pub id: String,

    #[serde(default)]
    pub deleted: bool,
}

/// Stripe error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorBody {
    pub error: StripeErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_webhook_endpoint_list() {
        let json = r#"{
            "object": "list",
            "url": "/v1/webhook_endpoints",
            "has_more": true,
            "data": [
                {
                    "id": "we_1",
                    "object": "webhook_endpoint",
                    "api_version": null,
                    "application": null,
                    "created": 1704067200,
                    "description": null,
                    "enabled_events": ["charge.succeeded", "charge.failed"],
                    "livemode": false,
                    "metadata": {},
                    "status": "enabled",
                    "url": "https://a.example/hook"
                }
            ]
        }"#;

        let list: StripeList<StripeWebhookEndpoint> = serde_json::from_str(json).unwrap();
        assert!(list.has_more);
        assert_eq!(list.data.len(), 1);

        let endpoint: WebhookEndpoint = list.data[0].clone().into();
        assert_eq!(endpoint.id, "we_1");
        assert_eq!(endpoint.url, "https://a.example/hook");
        assert_eq!(endpoint.enabled_events, vec!["charge.succeeded", "charge.failed"]);
        assert_eq!(endpoint.status.as_deref(), Some("enabled"));
    }

    #[test]
    fn listed_endpoint_has_no_secret() {
        let json = r#"{"id":"we_1","url":"https://a.example/hook","enabled_events":["*"]}"#;
        let endpoint: StripeWebhookEndpoint = serde_json::from_str(json).unwrap();
        assert!(endpoint.secret.is_none());
    }

    #[test]
    fn parse_created_endpoint_with_secret() {
        let json = r#"{
            "id": "we_new",
            "object": "webhook_endpoint",
            "enabled_events": ["invoice.paid"],
            "secret": "whsec_abc123",
            "status": "enabled",
            "url": "https://b.example/hook"
        }"#;

        let endpoint: StripeWebhookEndpoint = serde_json::from_str(json).unwrap();
        assert_eq!(endpoint.secret.as_deref(), Some("whsec_abc123"));
    }

    #[test]
    fn parse_deleted_object() {
        let json = r#"{"id":"we_9","object":"webhook_endpoint","deleted":true}"#;
        let deleted: StripeDeletedObject = serde_json::from_str(json).unwrap();
        assert_eq!(deleted.id, "we_9");
        assert!(deleted.deleted);
    }

    #[test]
    fn parse_error_body() {
        let json = r#"{
            "error": {
                "code": "url_invalid",
                "message": "Invalid URL: not-a-url",
                "param": "url",
                "type": "invalid_request_error"
            }
        }"#;

        let body: StripeErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code.as_deref(), Some("url_invalid"));
        assert_eq!(body.error.error_type.as_deref(), Some("invalid_request_error"));
        assert!(body.error.message.unwrap().contains("Invalid URL"));
    }
}
