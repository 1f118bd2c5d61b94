//! Document analysis endpoint.

use axum::extract::State;
use axum::Json;
use orchestrator::{DocumentAnalysisRequest, DocumentAnalysisResponse};

use crate::auth::AuthenticatedUser;
use crate::error::Result;
use crate::state::AppState;

/// Analyse a document against the requested frameworks. Nothing is stored.
pub async fn analyze_document(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(request): Json<DocumentAnalysisRequest>,
) -> Result<Json<DocumentAnalysisResponse>> {
    let response = state.orchestrator.analyze_document(&request).await?;
    Ok(Json(response))
}
