//! The `Brain` trait.

use async_trait::async_trait;

use crate::completion::{Completion, CompletionRequest};
use crate::error::BrainError;

/// A text-generation provider.
///
/// Implementations must be cheap to share behind an `Arc`; the HTTP layer
/// holds one instance for the lifetime of the process and calls it from
/// many concurrent request tasks.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Generate a reply for a single system prompt + user message.
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError>;

    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Whether the brain is ready to accept requests.
    async fn is_ready(&self) -> bool {
        true
    }
}
