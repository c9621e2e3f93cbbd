//! Stripe Webhook Tasks - create and delete Stripe webhook endpoints.
//!
//! Two operator tasks built on hexagonal layers: the domain holds endpoint
//! types and option parsing, ports define the webhook API and credential
//! lookup, adapters implement them for Stripe and the application config,
//! and the application layer runs the create/delete flows.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
