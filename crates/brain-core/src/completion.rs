//! Request and response types exchanged with a brain.

use serde::{Deserialize, Serialize};

/// A single-turn generation request.
///
/// The conversation is always one user message under one system prompt;
/// history is never replayed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Fully composed system prompt.
    pub system_prompt: String,
    /// The user-role message content.
    pub message: String,
}

impl CompletionRequest {
    /// Create a request from a system prompt and a user message.
    pub fn new(system_prompt: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            message: message.into(),
        }
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Generated reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// Reply text (first text block of the provider response).
    pub text: String,
    /// Model that produced the reply, if reported.
    pub model: Option<String>,
    /// Token usage, if reported.
    pub usage: Option<TokenUsage>,
}

impl Completion {
    /// A completion carrying only text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
            usage: None,
        }
    }

    /// Attach the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach token usage.
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}
