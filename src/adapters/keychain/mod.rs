//! Service keychain adapters.
//!
//! - `ConfigKeychain` - credentials from application configuration (env / `.env`)
//! - `InMemoryKeychain` - credentials registered at runtime, for tests

mod config_keychain;
mod in_memory;

pub use config_keychain::{ConfigKeychain, STRIPE_SERVICE};
pub use in_memory::InMemoryKeychain;
