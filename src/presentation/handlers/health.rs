use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Liveness check. Answers without touching the database.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
