//! Trading signal validation
//!
//! Classifies an untyped JSON payload field by field and collects every
//! violation instead of stopping at the first one.

use serde_json::{Number, Value};

use crate::models::signal::{Action, ValidatedSignal};
use crate::signals::failure::ValidationFailure;

/// Classification of a single payload field
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue<'a, T> {
    Missing,
    WrongType(&'a Value),
    Present(T),
}

fn string_field<'a>(payload: &'a Value, key: &str) -> FieldValue<'a, &'a str> {
    match payload.get(key) {
        None | Some(Value::Null) => FieldValue::Missing,
        Some(Value::String(s)) => FieldValue::Present(s.as_str()),
        Some(other) => FieldValue::WrongType(other),
    }
}

fn number_field<'a>(payload: &'a Value, key: &str) -> FieldValue<'a, &'a Number> {
    match payload.get(key) {
        None | Some(Value::Null) => FieldValue::Missing,
        Some(Value::Number(n)) => FieldValue::Present(n),
        Some(other) => FieldValue::WrongType(other),
    }
}

/// Non-empty string, or `None` after recording the field as missing
fn required_str<'a>(
    payload: &'a Value,
    key: &'static str,
    failures: &mut Vec<ValidationFailure>,
) -> Option<&'a str> {
    match string_field(payload, key) {
        FieldValue::Present(s) if !s.is_empty() => Some(s),
        FieldValue::WrongType(value) => {
            tracing::debug!(field = key, value = %value, "Field has wrong JSON type");
            failures.push(ValidationFailure::MissingField(key));
            None
        }
        _ => {
            failures.push(ValidationFailure::MissingField(key));
            None
        }
    }
}

/// Stateless validator for inbound trading signals
pub struct SignalValidator;

impl SignalValidator {
    /// Validate a decoded webhook payload.
    ///
    /// On success the payload is returned untouched inside a
    /// [`ValidatedSignal`]. On failure every violation is returned, ordered
    /// symbol, action, price. A `MissingField` for a field suppresses the
    /// value check on that same field.
    pub fn validate(payload: &Value) -> Result<ValidatedSignal, Vec<ValidationFailure>> {
        let mut failures = Vec::new();

        let symbol = required_str(payload, "symbol", &mut failures);

        let action = required_str(payload, "action", &mut failures).and_then(|raw| {
            let parsed = Action::parse(raw);
            if parsed.is_none() {
                failures.push(ValidationFailure::InvalidAction(raw.to_string()));
            }
            parsed
        });

        let price = match number_field(payload, "price") {
            FieldValue::Present(number) => match number.as_f64() {
                Some(price) if price.is_finite() && price > 0.0 => Some(price),
                _ => {
                    failures.push(ValidationFailure::InvalidPrice(number.clone()));
                    None
                }
            },
            FieldValue::WrongType(value) => {
                tracing::debug!(field = "price", value = %value, "Field has wrong JSON type");
                failures.push(ValidationFailure::MissingField("price"));
                None
            }
            FieldValue::Missing => {
                failures.push(ValidationFailure::MissingField("price"));
                None
            }
        };

        match (symbol, action, price) {
            (Some(symbol), Some(action), Some(price)) => Ok(
                ValidatedSignal::new(symbol.to_string(), action, price, payload.clone()),
            ),
            _ => Err(failures),
        }
    }
}
