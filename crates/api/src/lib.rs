//! HTTP API for the vCISO advisor backend.
//!
//! Routes (all under `/api`):
//!
//! - `GET  /api/health`
//! - `POST /api/chat`
//! - `POST /api/chat/stream`
//! - `POST /api/analyze-document`

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;

pub use auth::{AuthError, AuthenticatedUser, SupabaseTokenVerifier, TokenVerifier, UserIdentity};
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use state::AppState;

/// Build the application with permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
