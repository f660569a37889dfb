//! Trading signal validation interfaces.

pub mod failure;
pub mod validator;

pub use failure::*;
pub use validator::*;
