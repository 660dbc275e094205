//! Health Check API Handler
//!
//! Liveness endpoint. Does not touch the store.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
