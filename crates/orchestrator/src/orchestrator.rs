//! The request pipeline: compose, generate, shape, persist.

use std::sync::Arc;

use brain_core::{Brain, CompletionRequest};
use database::{ConversationStore, NewConversation, NewMessage};
use tracing::{debug, error, info};

use crate::analysis::build_analysis_prompt;
use crate::confidence::confidence;
use crate::context::{compose_system_prompt, ChatContext};
use crate::error::OrchestratorError;
use crate::frameworks::detect_frameworks;
use crate::prompts::PromptMode;
use crate::types::{
    AdvisorReply, ChatRequest, ChatResponse, DocumentAnalysisRequest, DocumentAnalysisResponse,
};

/// Number of message characters included in request logs.
const LOG_PREVIEW_CHARS: usize = 100;

/// Coordinates the provider and the store for each request.
///
/// Holds no per-request state; one instance is shared by all handlers.
#[derive(Clone)]
pub struct Orchestrator {
    brain: Arc<dyn Brain>,
    store: Arc<dyn ConversationStore>,
    mode: PromptMode,
}

impl Orchestrator {
    /// Create an orchestrator using the general advisor prompt.
    pub fn new(brain: Arc<dyn Brain>, store: Arc<dyn ConversationStore>) -> Self {
        Self {
            brain,
            store,
            mode: PromptMode::General,
        }
    }

    /// Use a different base prompt.
    pub fn with_prompt_mode(mut self, mode: PromptMode) -> Self {
        self.mode = mode;
        self
    }

    /// The base prompt mode in use.
    pub fn prompt_mode(&self) -> PromptMode {
        self.mode
    }

    /// Compose the system prompt, call the provider once, and shape the reply.
    pub async fn respond(
        &self,
        message: &str,
        context: Option<&ChatContext>,
    ) -> Result<AdvisorReply, OrchestratorError> {
        let system_prompt = compose_system_prompt(self.mode, context);

        let completion = self
            .brain
            .complete(CompletionRequest::new(system_prompt, message))
            .await
            .map_err(|e| {
                error!("Error getting AI response from {}: {}", self.brain.name(), e);
                OrchestratorError::Brain(e)
            })?;

        let has_company_context = context.is_some_and(ChatContext::has_company_context);
        let referenced_frameworks = detect_frameworks(&completion.text);
        let confidence = confidence(&completion.text, has_company_context);

        debug!(
            "Shaped reply: {} chars, confidence {:.3}, frameworks {:?}",
            completion.text.chars().count(),
            confidence,
            referenced_frameworks
        );

        Ok(AdvisorReply {
            response: completion.text,
            confidence,
            referenced_frameworks,
            referenced_documents: Vec::new(),
        })
    }

    /// Serve one chat turn end-to-end.
    ///
    /// A conversation row is created only after the provider succeeded. If
    /// the message insert then fails, the new conversation row remains.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, OrchestratorError> {
        let preview: String = request.message.chars().take(LOG_PREVIEW_CHARS).collect();
        info!("Chat request from user {}: {}...", request.user_id, preview);

        let reply = self
            .respond(&request.message, request.context.as_ref())
            .await?;

        let conversation_id = match request.conversation_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                let conversation = NewConversation::from_first_message(
                    request.user_id.clone(),
                    request.company_id.clone(),
                    &request.message,
                );
                let id = self.store.create_conversation(&conversation).await?;
                info!("Created conversation {} via {}", id, self.store.name());
                id
            }
        };

        let message = NewMessage::assistant(
            conversation_id.clone(),
            request.user_id,
            reply.response.clone(),
            reply.confidence,
            reply.referenced_frameworks.clone(),
            reply.referenced_documents.clone(),
        );
        self.store.insert_message(&message).await.map_err(|e| {
            error!(
                "Failed to save assistant message for conversation {}: {}",
                conversation_id, e
            );
            OrchestratorError::Store(e)
        })?;

        Ok(ChatResponse {
            response: reply.response,
            confidence: reply.confidence,
            referenced_frameworks: reply.referenced_frameworks,
            referenced_documents: reply.referenced_documents,
            conversation_id,
        })
    }

    /// Analyse a document. Nothing is persisted.
    pub async fn analyze_document(
        &self,
        request: &DocumentAnalysisRequest,
    ) -> Result<DocumentAnalysisResponse, OrchestratorError> {
        info!(
            "Document analysis for company {}: {} ({} chars)",
            request.company_id,
            request.document_type,
            request.document_content.chars().count()
        );

        let prompt = build_analysis_prompt(request);
        let reply = self.respond(&prompt, None).await?;

        Ok(DocumentAnalysisResponse {
            summary: reply.response,
            confidence: reply.confidence,
            framework_mappings: reply.referenced_frameworks,
            recommendations: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::async_trait;
    use database::{DatabaseError, Message};
    use mock_brain::{EchoBrain, FailingBrain, FixedBrain};
    use std::sync::Mutex;

    /// In-memory store double that records inserts.
    #[derive(Default)]
    struct RecordingStore {
        conversations: Mutex<Vec<NewConversation>>,
        messages: Mutex<Vec<NewMessage>>,
        fail_messages: bool,
    }

    #[async_trait]
    impl ConversationStore for RecordingStore {
        async fn create_conversation(&self, conversation: &NewConversation) -> database::Result<String> {
            let mut conversations = self.conversations.lock().unwrap();
            conversations.push(conversation.clone());
            Ok(format!("conv-{}", conversations.len()))
        }

        async fn insert_message(&self, message: &NewMessage) -> database::Result<()> {
            if self.fail_messages {
                return Err(DatabaseError::Rejected {
                    table: "messages",
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.messages.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn list_messages(&self, _conversation_id: &str) -> database::Result<Vec<Message>> {
            Ok(Vec::new())
        }

        fn name(&self) -> &str {
            "RecordingStore"
        }
    }

    fn chat_request(conversation_id: Option<&str>, context: Option<ChatContext>) -> ChatRequest {
        ChatRequest {
            message: "How do we get started with SOC 2?".to_string(),
            conversation_id: conversation_id.map(str::to_string),
            user_id: "user-1".to_string(),
            company_id: Some("company-1".to_string()),
            context,
        }
    }

    fn company_context() -> ChatContext {
        serde_json::from_value(serde_json::json!({
            "company_context": {"industry": "SaaS"}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_chat_creates_conversation_and_one_assistant_message() {
        let brain = Arc::new(FixedBrain::new("Scope your SOC 2 audit and map to NIST CSF."));
        let store = Arc::new(RecordingStore::default());
        let orchestrator = Orchestrator::new(brain.clone(), store.clone());

        let response = orchestrator.chat(chat_request(None, None)).await.unwrap();

        assert_eq!(response.conversation_id, "conv-1");
        assert_eq!(response.referenced_frameworks, vec!["NIST", "SOC2"]);
        assert!(response.referenced_documents.is_empty());

        let conversations = store.conversations.lock().unwrap();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].title, "How do we get started with SOC 2?");

        let messages = store.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "assistant");
        assert_eq!(messages[0].conversation_id, "conv-1");
        assert_eq!(messages[0].content, response.response);
        assert_eq!(brain.call_count(), 1);
    }

    #[tokio::test]
    async fn test_chat_reuses_supplied_conversation() {
        let store = Arc::new(RecordingStore::default());
        let orchestrator = Orchestrator::new(Arc::new(EchoBrain::new()), store.clone());

        let response = orchestrator
            .chat(chat_request(Some("existing"), None))
            .await
            .unwrap();

        assert_eq!(response.conversation_id, "existing");
        assert!(store.conversations.lock().unwrap().is_empty());
        assert_eq!(store.messages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_empty_conversation_id_creates_new() {
        let store = Arc::new(RecordingStore::default());
        let orchestrator = Orchestrator::new(Arc::new(EchoBrain::new()), store.clone());

        let response = orchestrator.chat(chat_request(Some(""), None)).await.unwrap();

        assert_eq!(response.conversation_id, "conv-1");
    }

    #[tokio::test]
    async fn test_provider_failure_persists_nothing() {
        let brain = Arc::new(FailingBrain::with_status(529));
        let store = Arc::new(RecordingStore::default());
        let orchestrator = Orchestrator::new(brain.clone(), store.clone());

        let err = orchestrator.chat(chat_request(None, None)).await.unwrap_err();

        assert!(matches!(err, OrchestratorError::Brain(_)));
        assert!(err.to_string().contains("529"));
        assert_eq!(brain.call_count(), 1);
        assert!(store.conversations.lock().unwrap().is_empty());
        assert!(store.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_message_failure_leaves_conversation() {
        let store = Arc::new(RecordingStore {
            fail_messages: true,
            ..Default::default()
        });
        let orchestrator = Orchestrator::new(Arc::new(EchoBrain::new()), store.clone());

        let err = orchestrator.chat(chat_request(None, None)).await.unwrap_err();

        assert!(matches!(err, OrchestratorError::Store(_)));
        assert_eq!(store.conversations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_context_reaches_system_prompt_and_boosts_confidence() {
        let brain = Arc::new(FixedBrain::new("x".repeat(4000)));
        let orchestrator = Orchestrator::new(brain.clone(), Arc::new(RecordingStore::default()));

        let response = orchestrator
            .chat(chat_request(None, Some(company_context())))
            .await
            .unwrap();

        assert!((response.confidence - 1.0).abs() < 1e-9);
        let request = brain.last_request().unwrap();
        assert!(request.system_prompt.contains("- Industry: SaaS"));
        assert_eq!(request.message, "How do we get started with SOC 2?");
    }

    #[tokio::test]
    async fn test_empty_company_profile_still_earns_bonus() {
        let brain = Arc::new(FixedBrain::new(""));
        let orchestrator = Orchestrator::new(brain.clone(), Arc::new(RecordingStore::default()));
        let context: ChatContext = serde_json::from_value(serde_json::json!({
            "company_context": {"industry": null, "frameworks": [], "relevant_documents": []}
        }))
        .unwrap();

        let reply = orchestrator.respond("hello", Some(&context)).await.unwrap();

        assert!((reply.confidence - 0.75).abs() < 1e-9);
        assert!(brain
            .last_request()
            .unwrap()
            .system_prompt
            .contains("Company Context:"));
    }

    #[tokio::test]
    async fn test_prompt_mode_selects_base_prompt() {
        let brain = Arc::new(FixedBrain::new("ok"));
        let orchestrator = Orchestrator::new(brain.clone(), Arc::new(RecordingStore::default()))
            .with_prompt_mode(PromptMode::Risk);

        orchestrator.respond("hello", None).await.unwrap();

        assert_eq!(orchestrator.prompt_mode(), PromptMode::Risk);
        assert_eq!(
            brain.last_request().unwrap().system_prompt,
            PromptMode::Risk.system_prompt()
        );
    }

    #[tokio::test]
    async fn test_analyze_document() {
        let brain = Arc::new(FixedBrain::new(
            "This policy supports HIPAA and the Payment Card Industry standard.",
        ));
        let store = Arc::new(RecordingStore::default());
        let orchestrator = Orchestrator::new(brain.clone(), store.clone());

        let request = DocumentAnalysisRequest {
            document_content: "Encrypt cardholder data.".to_string(),
            document_type: "policy".to_string(),
            company_id: "company-1".to_string(),
            frameworks: vec!["PCI DSS".to_string()],
        };
        let response = orchestrator.analyze_document(&request).await.unwrap();

        assert_eq!(response.framework_mappings, vec!["HIPAA", "PCI DSS"]);
        assert!(response.recommendations.is_empty());
        assert!(response.confidence < 0.95);

        let sent = brain.last_request().unwrap();
        assert_eq!(sent.system_prompt, PromptMode::General.system_prompt());
        assert!(sent.message.contains("Encrypt cardholder data."));
        assert!(store.messages.lock().unwrap().is_empty());
    }
}
