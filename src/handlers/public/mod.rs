// handlers/public/mod.rs - Endpoints reachable without an API key
use axum::Json;
use serde_json::{json, Value};

/// GET / - service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "devil-api",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST facade over the devil hosting-control daemon",
    }))
}

/// GET /health - liveness probe; does not touch the daemon
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
