use axum::Json;
use serde_json::json;
use serde_json::Value;

/// Liveness probe; touches neither the store nor the token key.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
