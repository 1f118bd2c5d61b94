//! Fixed-reply brain that records what it was asked.

use std::sync::Mutex;

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};

/// A brain that always replies with the same text.
///
/// Every request is recorded so tests can assert on the composed system
/// prompt and on how many provider calls a code path made.
#[derive(Debug, Default)]
pub struct FixedBrain {
    reply: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FixedBrain {
    /// Create a brain that answers every request with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completed calls.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// All requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Brain for FixedBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        Ok(Completion::text(self.reply.clone()).with_model("fixed"))
    }

    fn name(&self) -> &str {
        "FixedBrain"
    }
}
