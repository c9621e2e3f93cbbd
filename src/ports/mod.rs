//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the tasks and the outside world. Adapters implement these ports.
//!
//! - `WebhookEndpointApi` - List, create and delete webhook endpoints
//! - `ServiceKeychain` - Credential lookup by service name and alias

mod service_keychain;
mod webhook_endpoint_api;

pub use service_keychain::{KeychainError, ServiceCredential, ServiceKeychain};
pub use webhook_endpoint_api::{WebhookApiError, WebhookApiErrorCode, WebhookEndpointApi};
