//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::OrchestratorError;
use thiserror::Error;

use crate::auth::AuthError;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or rejected bearer token.
    #[error("Invalid token")]
    Unauthorized(#[from] AuthError),

    /// Provider or store failure.
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Unauthorized(err) => {
                tracing::warn!("Rejected request: {}", err);
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::Orchestrator(err) => {
                tracing::error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "detail": detail
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::BrainError;

    #[test]
    fn test_unauthorized_is_401() {
        let response = ApiError::from(AuthError::MissingToken).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_provider_failure_is_500() {
        let err = ApiError::from(OrchestratorError::from(BrainError::Timeout));
        assert!(err.to_string().starts_with("Failed to get AI response"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
