/*
 * Responsibility
 * - GET /health (liveness, outside the auth gate)
 * - Does not call the token authority
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "validator": state.validator.backend_name(),
        })),
    )
}
