//! Anthropic Claude brain implementation.
//!
//! This crate provides a [`Brain`] that sends a single system prompt and a
//! single user message to the Anthropic Messages API and returns the first
//! text block of the reply.
//!
//! # Behaviour
//!
//! - One non-streaming `POST /v1/messages` per call
//! - Fixed generation settings (2000 max tokens, temperature 0.3 by default)
//! - 30-second request timeout
//! - No retries: a non-success status becomes [`BrainError::Upstream`]
//!
//! # Usage
//!
//! ```rust,no_run
//! use claude_brain::{Brain, ClaudeBrain, CompletionRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = ClaudeBrain::from_env()?;
//!     let reply = brain
//!         .complete(CompletionRequest::new("You are a Virtual CISO.", "What is SOC 2?"))
//!         .await?;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::ClaudeBrain;
pub use config::{ClaudeBrainConfig, ClaudeBrainConfigBuilder};

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest, TokenUsage};
