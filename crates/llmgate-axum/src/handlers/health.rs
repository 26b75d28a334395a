//! Liveness probe.

use axum::Json;
use axum::response::IntoResponse;

/// Always `{"status":"ok"}`; touches neither configuration nor upstream.
pub async fn check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}
