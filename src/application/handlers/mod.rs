//! Application handlers.
//!
//! Command handlers that orchestrate task operations.

pub mod webhook;
