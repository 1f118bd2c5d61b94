//! Echo brain implementation - echoes the user message back.

use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};

/// A simple brain that echoes the user message back.
#[derive(Debug, Clone, Default)]
pub struct EchoBrain {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoBrain {
    /// Create a new EchoBrain with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoBrain with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_brain::EchoBrain;
    ///
    /// let brain = EchoBrain::with_prefix("Echo: ");
    /// // Will respond with "Echo: <original message>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Brain for EchoBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        let text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, request.message),
            None => request.message,
        };

        Ok(Completion::text(text).with_model("echo"))
    }

    fn name(&self) -> &str {
        "EchoBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let brain = EchoBrain::new();
        let reply = brain
            .complete(CompletionRequest::new("system", "Hello!"))
            .await
            .unwrap();
        assert_eq!(reply.text, "Hello!");
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let brain = EchoBrain::with_prefix("Echo: ");
        let reply = brain
            .complete(CompletionRequest::new("system", "Hello!"))
            .await
            .unwrap();
        assert_eq!(reply.text, "Echo: Hello!");
    }

    #[tokio::test]
    async fn test_brain_name() {
        let brain = EchoBrain::new();
        assert_eq!(brain.name(), "EchoBrain");
        assert!(brain.is_ready().await);
    }
}
