//! Health check endpoint.

use actix_web::{get, HttpResponse};
use serde_json::json;

/// GET /v1/api/health
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
