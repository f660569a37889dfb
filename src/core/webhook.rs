//! TradingView webhook endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::http::AppState;
use crate::signals::{FailureDescriptor, SignalValidator, ValidationFailure};

pub const SUCCESS_MESSAGE: &str = "Trading signal received successfully";
pub const REJECTED_MESSAGE: &str = "Invalid trading signal";

/// Response envelope shared by success and error replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FailureDescriptor>>,
}

impl WebhookResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: SUCCESS_MESSAGE.to_string(),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>, errors: Option<Vec<FailureDescriptor>>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            errors,
        }
    }
}

/// Ways a webhook request is turned away
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Body parsed but the signal failed validation (400)
    #[error("Invalid trading signal")]
    Rejected(Vec<ValidationFailure>),

    /// Body could not be read or decoded as JSON
    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for WebhookError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let message = match &rejection {
            JsonRejection::MissingJsonContentType(_) => {
                "Expected request with `Content-Type: application/json`"
            }
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                "Malformed JSON payload"
            }
            _ if status == StatusCode::PAYLOAD_TOO_LARGE => "Request body too large",
            _ => "Failed to read request body",
        };
        WebhookError::MalformedBody {
            status,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            WebhookError::Rejected(failures) => (
                StatusCode::BAD_REQUEST,
                WebhookResponse::error(
                    REJECTED_MESSAGE,
                    Some(failures.iter().map(FailureDescriptor::from).collect()),
                ),
            ),
            WebhookError::MalformedBody { status, message } => {
                (status, WebhookResponse::error(message, None))
            }
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/webhook/tradingview`
///
/// Acknowledges a valid signal; the signal is not acted upon here.
pub async fn tradingview_webhook(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WebhookResponse>, WebhookError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), error = %rejection.body_text(), "Unreadable webhook body");
        state
            .metrics
            .signals_rejected_total
            .with_label_values(&["MALFORMED_BODY"])
            .inc();
        WebhookError::from(rejection)
    })?;

    match SignalValidator::validate(&payload) {
        Ok(signal) => {
            state.metrics.signals_accepted_total.inc();
            info!(
                symbol = signal.symbol(),
                action = %signal.action(),
                price = signal.price(),
                timestamp = ?signal.timestamp(),
                has_strategy = signal.strategy().is_some(),
                metadata_len = signal.metadata_len(),
                "Trading signal received"
            );
            Ok(Json(WebhookResponse::success()))
        }
        Err(failures) => {
            let codes: Vec<&str> = failures.iter().map(ValidationFailure::code).collect();
            for code in &codes {
                state
                    .metrics
                    .signals_rejected_total
                    .with_label_values(&[*code])
                    .inc();
            }
            warn!(failures = ?codes, "Trading signal rejected");
            Err(WebhookError::Rejected(failures))
        }
    }
}
