//! Webhook domain module.
//!
//! # Module Structure
//!
//! - `endpoint` - Webhook endpoint value types and the listing page limit
//! - `options` - Typed task options parsed from raw option values

mod endpoint;
mod options;

pub use endpoint::{
    CreateEndpointRequest, CreatedWebhookEndpoint, EndpointPage, WebhookEndpoint, LIST_PAGE_LIMIT,
};
pub use options::{
    names as option_names, parse_bool, parse_list, CreateWebhookOptions, DeleteWebhookOptions,
    OptionError, OptionValue, StripeTaskOptions, TaskOptions,
};
