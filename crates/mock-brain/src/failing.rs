//! Brain that always fails with an upstream status.

use std::sync::atomic::{AtomicUsize, Ordering};

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};

/// A brain whose every call fails as if the provider returned `status`.
#[derive(Debug)]
pub struct FailingBrain {
    status: u16,
    calls: AtomicUsize,
}

impl FailingBrain {
    /// Fail with the given HTTP status.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of attempted calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FailingBrain {
    fn default() -> Self {
        Self::with_status(500)
    }
}

#[async_trait]
impl Brain for FailingBrain {
    async fn complete(&self, _request: CompletionRequest) -> Result<Completion, BrainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(BrainError::Upstream {
            status: self.status,
            message: "mock provider failure".to_string(),
        })
    }

    fn name(&self) -> &str {
        "FailingBrain"
    }
}
