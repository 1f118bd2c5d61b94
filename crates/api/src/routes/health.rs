//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Service version reported by the health check.
pub const VERSION: &str = "1.0.0";

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Health check endpoint. Touches no dependencies.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        version: VERSION.to_string(),
    })
}
