//! HTTP surface: router, shared state and the webhook handler

pub mod http;
pub mod webhook;

pub use http::*;
pub use webhook::*;
