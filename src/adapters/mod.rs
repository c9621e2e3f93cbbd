//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the tasks to external systems:
//! - `stripe` - Stripe REST client for webhook endpoints (plus an in-memory mock)
//! - `keychain` - Credential lookup from configuration or memory

pub mod keychain;
pub mod stripe;
