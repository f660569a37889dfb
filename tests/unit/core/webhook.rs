//! Unit tests for webhook response envelopes

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Number, Value};
use signal_webhook::core::webhook::{WebhookError, WebhookResponse};
use signal_webhook::signals::ValidationFailure;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[test]
fn test_success_envelope_has_no_errors_field() {
    let encoded = serde_json::to_value(WebhookResponse::success()).unwrap();
    assert_eq!(
        encoded,
        json!({"status": "success", "message": "Trading signal received successfully"})
    );
}

#[tokio::test]
async fn test_rejected_maps_to_bad_request() {
    let error = WebhookError::Rejected(vec![
        ValidationFailure::MissingField("action"),
        ValidationFailure::InvalidPrice(Number::from(-100)),
    ]);
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Invalid trading signal");
    assert_eq!(
        body["errors"],
        json!([
            {
                "code": "MISSING_FIELD",
                "field": "action",
                "message": "Missing required field: action"
            },
            {
                "code": "INVALID_PRICE",
                "field": "price",
                "value": -100,
                "message": "Invalid price: -100. Must be a positive number"
            }
        ])
    );
}

#[tokio::test]
async fn test_malformed_body_keeps_status() {
    let error = WebhookError::MalformedBody {
        status: StatusCode::PAYLOAD_TOO_LARGE,
        message: "Request body too large".to_string(),
    };
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"status": "error", "message": "Request body too large"})
    );
}
