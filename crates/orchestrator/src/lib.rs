//! Advisor pipeline for the vCISO backend.
//!
//! The [`Orchestrator`] turns a chat turn or a document into one provider
//! call and a shaped reply:
//!
//! ```text
//! ChatRequest
//!      ↓
//! compose system prompt (base prompt + rendered ChatContext)
//!      ↓
//! Brain::complete (one call, no retry)
//!      ↓
//! shape: framework tags + confidence score
//!      ↓
//! ConversationStore: create conversation (if needed), insert assistant message
//!      ↓
//! ChatResponse
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use orchestrator::{ChatRequest, Orchestrator};
//!
//! let orchestrator = Orchestrator::new(Arc::new(brain), Arc::new(store));
//! let response = orchestrator.chat(request).await?;
//! println!("{} ({:.2})", response.response, response.confidence);
//! ```

pub mod analysis;
pub mod confidence;
pub mod context;
pub mod error;
pub mod frameworks;
mod orchestrator;
pub mod prompts;
pub mod types;

pub use analysis::build_analysis_prompt;
pub use confidence::confidence;
pub use context::{compose_system_prompt, ChatContext, CompanyContext, ComplianceStatus, DocumentRef};
pub use error::OrchestratorError;
pub use frameworks::detect_frameworks;
pub use orchestrator::Orchestrator;
pub use prompts::PromptMode;
pub use types::{
    AdvisorReply, ChatRequest, ChatResponse, DocumentAnalysisRequest, DocumentAnalysisResponse,
};
