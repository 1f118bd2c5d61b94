//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::Orchestrator;

use crate::auth::TokenVerifier;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Advisor pipeline.
    pub orchestrator: Arc<Orchestrator>,
    /// Bearer token verifier.
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Create new application state.
    pub fn new(orchestrator: Orchestrator, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            verifier,
        }
    }
}
