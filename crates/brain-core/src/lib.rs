//! Core trait and types for brain implementations.
//!
//! A "brain" is the external text-generation provider the vCISO backend
//! forwards prompts to. This crate defines the shared interface:
//!
//! - [`Brain`] - The trait that all provider implementations must implement
//! - [`CompletionRequest`] / [`Completion`] - Prompt input and generated output
//! - [`BrainError`] - Error types for provider calls
//! - [`hash_prompt`] - Stable fingerprint for logging composed system prompts
//!
//! # Example
//!
//! ```rust
//! use brain_core::{Brain, BrainError, Completion, CompletionRequest};
//! use async_trait::async_trait;
//!
//! struct MyBrain;
//!
//! #[async_trait]
//! impl Brain for MyBrain {
//!     async fn complete(&self, request: CompletionRequest) -> Result<Completion, BrainError> {
//!         Ok(Completion::text(format!("You said: {}", request.message)))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyBrain"
//!     }
//! }
//! ```

mod completion;
mod error;
mod prompt;
mod trait_def;

pub use completion::{Completion, CompletionRequest, TokenUsage};
pub use error::BrainError;
pub use prompt::hash_prompt;
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
