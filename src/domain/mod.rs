//! Domain layer containing task logic types.
//!
//! # Module Organization
//!
//! - `webhook` - Webhook endpoint value types and typed task options

pub mod webhook;
