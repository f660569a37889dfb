//! Signal Webhook
//!
//! Receives trading-signal alerts over HTTP, validates them and acknowledges
//! receipt. Signals are not persisted or forwarded.

pub mod config;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;
