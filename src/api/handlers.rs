//! HTTP request handlers

use super::types::{ErrorResponse, HealthResponse, RelayChatRequest};
use super::AppState;
use crate::llm::{ModelChatRequest, RelayFailure, RELAY_FAILURE_MESSAGE};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(relay_chat))
        .route("/health", get(health))
        .with_state(state)
}

// ============================================================
// Chat relay
// ============================================================

async fn relay_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, RelayFailure> {
    // No validation: whatever arrives is forwarded and the model service
    // decides whether it is usable
    let req: RelayChatRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Chat body is not a JSON object, forwarding without message");
        RelayChatRequest::default()
    });
    tracing::info!(user_message = ?req.message, "Received message");

    let request = ModelChatRequest::single_turn(state.model.model_id(), req.message);
    let reply = state.model.chat(&request).await?;
    Ok(Json(reply))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ============================================================
// Error Handling
// ============================================================

/// Details were already logged by `LoggingService`; clients only see the generic message
impl IntoResponse for RelayFailure {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(RELAY_FAILURE_MESSAGE));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
