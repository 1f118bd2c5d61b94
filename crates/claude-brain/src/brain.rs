//! ClaudeBrain implementation using the Anthropic Messages API.

use brain_core::{
    async_trait, hash_prompt, Brain, BrainError, Completion, CompletionRequest, TokenUsage,
};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::api_types::{ApiError, Message, MessagesRequest, MessagesResponse};
use crate::config::{ClaudeBrainConfig, API_VERSION};

/// A brain implementation that uses Anthropic's Messages API.
///
/// ClaudeBrain is stateless: every call sends exactly one system prompt and
/// one user message. The underlying HTTP client is reused across calls.
pub struct ClaudeBrain {
    client: Client,
    config: ClaudeBrainConfig,
}

impl ClaudeBrain {
    /// Create a new ClaudeBrain with the given configuration.
    pub fn new(config: ClaudeBrainConfig) -> Result<Self, BrainError> {
        if config.api_key.is_empty() {
            return Err(BrainError::Configuration("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BrainError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "ClaudeBrain initialized with model: {}, max_tokens: {}, timeout: {:?}",
            config.model, config.max_tokens, config.timeout
        );

        Ok(Self { client, config })
    }

    /// Create a ClaudeBrain from environment variables.
    ///
    /// See [`ClaudeBrainConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, BrainError> {
        Self::new(ClaudeBrainConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClaudeBrainConfig {
        &self.config
    }

    fn build_request(&self, request: CompletionRequest) -> MessagesRequest {
        MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            system: request.system_prompt,
            messages: vec![Message::user(request.message)],
        }
    }

    /// Send one request to the messages endpoint.
    async fn send(&self, body: &MessagesRequest) -> Result<MessagesResponse, BrainError> {
        let url = self.config.messages_url();

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BrainError::Timeout
                } else {
                    BrainError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Claude API error: {} - {}", status.as_u16(), error_text);

            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.error.message)
                .unwrap_or(error_text);

            return Err(BrainError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|e| {
            if e.is_timeout() {
                BrainError::Timeout
            } else {
                BrainError::MalformedResponse(format!("Failed to parse response: {}", e))
            }
        })
    }
}

#[async_trait]
impl Brain for ClaudeBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
        debug!(
            "Sending request to Claude API (model: {}, system prompt: {}, message chars: {})",
            self.config.model,
            hash_prompt(&request.system_prompt),
            request.message.chars().count()
        );

        let body = self.build_request(request);
        let response = self.send(&body).await?;

        let text = response
            .first_text()
            .ok_or_else(|| BrainError::MalformedResponse("response has no text content".to_string()))?
            .to_string();

        if let Some(ref usage) = response.usage {
            debug!(
                "Token usage - input: {}, output: {}",
                usage.input_tokens, usage.output_tokens
            );
        }

        let mut completion = Completion::text(text);
        if let Some(model) = response.model {
            completion = completion.with_model(model);
        }
        if let Some(usage) = response.usage {
            completion = completion.with_usage(TokenUsage {
                input_tokens: usage.input_tokens,
                output_tokens: usage.output_tokens,
            });
        }

        Ok(completion)
    }

    fn name(&self) -> &str {
        "ClaudeBrain"
    }
}
