use axum::Json;
use serde::Serialize;

/// Response body for the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Basic health probe.
///
/// Returns 200 immediately with the crate version. There are no
/// downstream dependencies to check.
#[axum::debug_handler]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
