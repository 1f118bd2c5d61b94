//! Request and response shapes of the advisor pipeline.

use serde::{Deserialize, Serialize};

use crate::context::ChatContext;

/// A chat turn from a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub context: Option<ChatContext>,
}

/// The shaped reply to a chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub confidence: f64,
    pub referenced_frameworks: Vec<String>,
    pub referenced_documents: Vec<String>,
    pub conversation_id: String,
}

/// A document to analyse against a set of frameworks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysisRequest {
    pub document_content: String,
    pub document_type: String,
    pub company_id: String,
    pub frameworks: Vec<String>,
}

/// Result of a document analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysisResponse {
    pub summary: String,
    pub confidence: f64,
    pub framework_mappings: Vec<String>,
    /// Never populated.
    pub recommendations: Vec<String>,
}

/// Output of the compose → generate → shape steps, before persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorReply {
    pub response: String,
    pub confidence: f64,
    pub referenced_frameworks: Vec<String>,
    /// Never populated; document matching is not implemented.
    pub referenced_documents: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_minimal() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "hi", "user_id": "u-1"}"#).unwrap();
        assert_eq!(request.user_id, "u-1");
        assert!(request.conversation_id.is_none());
        assert!(request.context.is_none());
    }

    #[test]
    fn test_chat_request_requires_user_id() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"message": "hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_allows_empty_message() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"message": "", "user_id": "u-1"}"#).unwrap();
        assert!(request.message.is_empty());
    }

    #[test]
    fn test_document_request_requires_frameworks() {
        let result = serde_json::from_str::<DocumentAnalysisRequest>(
            r#"{"document_content": "x", "document_type": "policy", "company_id": "c"}"#,
        );
        assert!(result.is_err());
    }
}
