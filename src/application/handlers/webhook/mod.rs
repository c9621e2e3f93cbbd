//! Webhook task handlers.
//!
//! ## Commands
//! - Creating a webhook endpoint (rejects duplicate URLs, returns the signing secret)
//! - Deleting a webhook endpoint by target URL
//!
//! Both tasks list endpoints before acting. The list and the mutation are
//! separate remote calls; a concurrent change by another client between them
//! is not detected.

mod create_webhook;
mod delete_webhook;
mod runner;
mod stripe_task;
mod task_error;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_webhook::{CreateWebhookCommand, CreateWebhookHandler, CreateWebhookResult};
pub use delete_webhook::{DeleteWebhookCommand, DeleteWebhookHandler, DeleteWebhookOutcome};
pub use runner::WebhookTaskRunner;
pub use stripe_task::StripeTaskContext;
pub use task_error::TaskError;
