//! Trading signal data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Side of a trading signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    /// Exact, case-sensitive match against the allowed actions
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "buy" => Some(Action::Buy),
            "sell" => Some(Action::Sell),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "buy",
            Action::Sell => "sell",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trading signal that passed validation
///
/// Wraps the inbound payload exactly as received. The required fields are
/// parsed out for convenience; everything else (`timestamp`, `strategy`,
/// `metadata`, unknown keys) is opaque cargo.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSignal {
    symbol: String,
    action: Action,
    price: f64,
    payload: Value,
}

impl ValidatedSignal {
    pub(crate) fn new(symbol: String, action: Action, price: f64, payload: Value) -> Self {
        Self {
            symbol,
            action,
            price,
            payload,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// The original payload, unmodified
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Best-effort RFC 3339 parse of `timestamp`.
    ///
    /// Returns `None` when the field is absent or unparsable; the timestamp
    /// never affects acceptance.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.payload
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc))
    }

    /// The `strategy` block, if one was sent
    pub fn strategy(&self) -> Option<&Value> {
        self.payload.get("strategy").filter(|v| !v.is_null())
    }

    /// Number of `metadata` entries (0 when absent or not an array)
    pub fn metadata_len(&self) -> usize {
        self.payload
            .get("metadata")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
