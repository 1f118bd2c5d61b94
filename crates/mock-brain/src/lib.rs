//! Mock brain implementations for testing.
//!
//! This crate provides implementations of the `Brain` trait that never touch
//! the network:
//! - `EchoBrain` - Replies with the user message
//! - `FixedBrain` - Replies with a fixed text and records every request
//! - `FailingBrain` - Fails every call with an upstream status
//!
//! For production use, see the `claude-brain` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, CompletionRequest, FixedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = FixedBrain::new("Start with an asset inventory.");
//!
//!     let reply = brain.complete(CompletionRequest::new("system", "Where do I start?")).await?;
//!     assert_eq!(reply.text, "Start with an asset inventory.");
//!     assert_eq!(brain.call_count(), 1);
//!     Ok(())
//! }
//! ```

mod echo;
mod failing;
mod fixed;

// Re-export brain-core types for convenience
pub use brain_core::{async_trait, Brain, BrainError, Completion, CompletionRequest};

pub use echo::EchoBrain;
pub use failing::FailingBrain;
pub use fixed::FixedBrain;
