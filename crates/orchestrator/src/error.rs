//! Error types for orchestrator operations.

use brain_core::BrainError;
use database::DatabaseError;
use thiserror::Error;

/// Errors that can occur while serving a chat or analysis request.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The text-generation provider failed.
    #[error("Failed to get AI response: {0}")]
    Brain(#[from] BrainError),

    /// A store insert or read failed.
    #[error("Failed to persist conversation: {0}")]
    Store(#[from] DatabaseError),
}
