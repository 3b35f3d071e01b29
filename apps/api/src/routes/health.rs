use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness message kept for existing deploy checks.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "AI Career Planner API is running"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-planner-api"
    }))
}
