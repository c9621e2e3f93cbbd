//! WebhookTaskRunner - runs a task end to end from raw options.
//!
//! Order per run: parse options, resolve the credential and build the client,
//! then hand off to the command handler. Invalid options therefore fail
//! before any credential lookup or remote call.

use std::sync::Arc;

use crate::config::StripeServiceConfig;
use crate::domain::webhook::{CreateWebhookOptions, DeleteWebhookOptions, TaskOptions};
use crate::ports::ServiceKeychain;

use super::{
    CreateWebhookHandler, CreateWebhookResult, DeleteWebhookHandler, DeleteWebhookOutcome,
    StripeTaskContext, TaskError,
};

pub struct WebhookTaskRunner {
    keychain: Arc<dyn ServiceKeychain>,
    settings: StripeServiceConfig,
}

impl WebhookTaskRunner {
    pub fn new(keychain: Arc<dyn ServiceKeychain>, settings: StripeServiceConfig) -> Self {
        Self { keychain, settings }
    }

    pub async fn create_webhook(&self, options: &TaskOptions) -> Result<CreateWebhookResult, TaskError> {
        let options = CreateWebhookOptions::from_options(options)?;
        let context = StripeTaskContext::connect(self.keychain.as_ref(), &options.service, &self.settings)?;

        CreateWebhookHandler::new(context.api())
            .handle((&options).into())
            .await
    }

    pub async fn delete_webhook(&self, options: &TaskOptions) -> Result<DeleteWebhookOutcome, TaskError> {
        let options = DeleteWebhookOptions::from_options(options)?;
        let context = StripeTaskContext::connect(self.keychain.as_ref(), &options.service, &self.settings)?;

        DeleteWebhookHandler::new(context.api())
            .handle((&options).into())
            .await
    }
}
