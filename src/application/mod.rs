//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates the webhook tasks and coordinates between ports.

pub mod handlers;

pub use handlers::webhook::{
    CreateWebhookCommand, CreateWebhookHandler, CreateWebhookResult,
    DeleteWebhookCommand, DeleteWebhookHandler, DeleteWebhookOutcome,
    StripeTaskContext, TaskError, WebhookTaskRunner,
};
