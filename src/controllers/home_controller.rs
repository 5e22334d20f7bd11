use axum::{
    Json,
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

pub async fn home() -> impl IntoResponse {
    Json(json!({ "ok": true, "name": "CryptoPulse API" }))
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not_found" })))
}
