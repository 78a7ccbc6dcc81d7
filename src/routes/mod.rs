use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub mod lists;
pub mod proxy;
pub mod recommendations;
pub mod works;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
