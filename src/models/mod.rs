//! Shared data models

pub mod signal;

pub use signal::{Action, ValidatedSignal};
