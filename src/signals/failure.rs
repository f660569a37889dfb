//! Validation failure taxonomy

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};
use thiserror::Error;

/// Reason a trading signal was rejected
///
/// The `Display` text is static per kind and offending value, so responses
/// can be matched exactly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationFailure {
    /// Required field absent, empty, or of the wrong JSON type
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `action` is a non-empty string outside the allowed set
    #[error("Invalid action: {0}. Must be one of: buy, sell")]
    InvalidAction(String),

    /// `price` is numeric but not strictly positive
    #[error("Invalid price: {0}. Must be a positive number")]
    InvalidPrice(Number),
}

impl ValidationFailure {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::MissingField(_) => "MISSING_FIELD",
            ValidationFailure::InvalidAction(_) => "INVALID_ACTION",
            ValidationFailure::InvalidPrice(_) => "INVALID_PRICE",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationFailure::MissingField(field) => field,
            ValidationFailure::InvalidAction(_) => "action",
            ValidationFailure::InvalidPrice(_) => "price",
        }
    }

    /// The offending value; `None` for missing fields
    pub fn value(&self) -> Option<Value> {
        match self {
            ValidationFailure::MissingField(_) => None,
            ValidationFailure::InvalidAction(action) => Some(Value::String(action.clone())),
            ValidationFailure::InvalidPrice(price) => Some(Value::Number(price.clone())),
        }
    }
}

/// Wire form of a [`ValidationFailure`] in error responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureDescriptor {
    pub code: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub message: String,
}

impl From<&ValidationFailure> for FailureDescriptor {
    fn from(failure: &ValidationFailure) -> Self {
        Self {
            code: failure.code().to_string(),
            field: failure.field().to_string(),
            value: failure.value(),
            message: failure.to_string(),
        }
    }
}

impl Serialize for ValidationFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FailureDescriptor::from(self).serialize(serializer)
    }
}
