//! Chat endpoints.

use axum::extract::State;
use axum::Json;
use orchestrator::{ChatRequest, ChatResponse};
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::error::Result;
use crate::state::AppState;

/// Run one chat turn and persist the assistant reply.
pub async fn chat(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let response = state.orchestrator.chat(request).await?;
    Ok(Json(response))
}

/// Body returned by the streaming endpoint until streaming exists.
#[derive(Serialize)]
pub struct StreamPlaceholder {
    pub message: &'static str,
}

/// Streaming chat. Authenticated, but not implemented.
pub async fn chat_stream(
    AuthenticatedUser(_user): AuthenticatedUser,
    Json(_request): Json<ChatRequest>,
) -> Json<StreamPlaceholder> {
    Json(StreamPlaceholder {
        message: "Streaming endpoint not yet implemented",
    })
}
