//! Connexify webhook route.
//!
//! The body is taken as raw bytes so the signature is checked over exactly
//! what the partner sent.

use askads_application::{HandleWebhookUseCase, WebhookAck, WebhookError};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::warn;

/// Webhook endpoint path.
pub const WEBHOOK_PATH: &str = "/api/webhooks/connexify";

/// Header carrying the hex HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "x-connexify-signature";

/// Build the webhook routes around a configured use case.
pub fn webhook_routes(use_case: HandleWebhookUseCase) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(receive))
        .with_state(use_case)
}

async fn receive(
    State(use_case): State<HandleWebhookUseCase>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    use_case.handle(&body, signature).map(Json).map_err(ApiError)
}

/// [`WebhookError`] rendered as `{"detail": ...}` with its status code.
struct ApiError(WebhookError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        warn!("Webhook rejected ({}): {}", status.as_u16(), self.0);
        (status, Json(serde_json::json!({ "detail": self.0.to_string() }))).into_response()
    }
}
