//! Unit tests for signal models

use chrono::{TimeZone, Utc};
use serde_json::json;
use signal_webhook::models::Action;
use signal_webhook::signals::SignalValidator;

#[test]
fn test_action_parse() {
    assert_eq!(Action::parse("buy"), Some(Action::Buy));
    assert_eq!(Action::parse("sell"), Some(Action::Sell));
    assert_eq!(Action::parse("Buy"), None);
    assert_eq!(Action::parse(""), None);
}

#[test]
fn test_action_round_trips_through_serde() {
    assert_eq!(serde_json::to_value(Action::Sell).unwrap(), json!("sell"));
    let parsed: Action = serde_json::from_value(json!("buy")).unwrap();
    assert_eq!(parsed, Action::Buy);
    assert_eq!(Action::Buy.to_string(), "buy");
}

#[test]
fn test_timestamp_parsed_when_valid() {
    let payload = json!({
        "symbol": "BTCUSDT",
        "action": "buy",
        "price": 50000,
        "timestamp": "2024-12-12T05:00:00Z"
    });
    let signal = SignalValidator::validate(&payload).unwrap();
    assert_eq!(
        signal.timestamp(),
        Some(Utc.with_ymd_and_hms(2024, 12, 12, 5, 0, 0).unwrap())
    );
}

#[test]
fn test_timestamp_absent_or_unparsable() {
    let payload = json!({"symbol": "BTCUSDT", "action": "buy", "price": 1});
    assert!(SignalValidator::validate(&payload).unwrap().timestamp().is_none());

    let payload = json!({"symbol": "BTCUSDT", "action": "buy", "price": 1, "timestamp": "yesterday"});
    assert!(SignalValidator::validate(&payload).unwrap().timestamp().is_none());
}

#[test]
fn test_strategy_and_metadata_accessors() {
    let payload = json!({
        "symbol": "BTCUSDT",
        "action": "sell",
        "price": 1,
        "strategy": {"order_contracts": 2},
        "metadata": [{"key": "a", "value": 1}, {"key": "b", "value": 2}]
    });
    let signal = SignalValidator::validate(&payload).unwrap();
    assert_eq!(signal.strategy(), Some(&json!({"order_contracts": 2})));
    assert_eq!(signal.metadata_len(), 2);

    let payload = json!({"symbol": "BTCUSDT", "action": "sell", "price": 1, "strategy": null});
    let signal = SignalValidator::validate(&payload).unwrap();
    assert!(signal.strategy().is_none());
    assert_eq!(signal.metadata_len(), 0);
}
