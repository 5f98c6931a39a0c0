use axum::response::IntoResponse;
use axum::Json;

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Server is running"
    }))
}
