//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Category assigned to every conversation this service creates.
pub const DEFAULT_CATEGORY: &str = "general";

/// Maximum number of characters of the first message used as a title.
pub const TITLE_MAX_CHARS: usize = 50;

/// Role of every persisted message. User messages are not stored.
pub const ASSISTANT_ROLE: &str = "assistant";

/// A conversation row to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConversation {
    pub user_id: String,
    pub company_id: Option<String>,
    pub title: String,
    pub category: String,
}

impl NewConversation {
    /// Build the row for a conversation opened by `message`.
    pub fn from_first_message(
        user_id: impl Into<String>,
        company_id: Option<String>,
        message: &str,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            company_id,
            title: conversation_title(message),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Derive a title: the first 50 characters, with `...` appended if cut.
pub fn conversation_title(message: &str) -> String {
    if message.chars().count() > TITLE_MAX_CHARS {
        let head: String = message.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

/// A stored conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub company_id: Option<String>,
    pub title: String,
    pub category: String,
    pub created_at: Option<String>,
}

/// A message row to insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub conversation_id: String,
    pub user_id: String,
    pub role: String,
    pub content: String,
    pub ai_confidence: f64,
    pub framework_references: Vec<String>,
    pub source_documents: Vec<String>,
}

impl NewMessage {
    /// An assistant reply row.
    pub fn assistant(
        conversation_id: impl Into<String>,
        user_id: impl Into<String>,
        content: impl Into<String>,
        ai_confidence: f64,
        framework_references: Vec<String>,
        source_documents: Vec<String>,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            user_id: user_id.into(),
            role: ASSISTANT_ROLE.to_string(),
            content: content.into(),
            ai_confidence,
            framework_references,
            source_documents,
        }
    }
}

/// A stored message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub user_id: String,
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub ai_confidence: Option<f64>,
    #[serde(default)]
    pub framework_references: Vec<String>,
    #[serde(default)]
    pub source_documents: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// SQLite row shape; list columns are JSON text.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct MessageRow {
    pub id: String,
    pub conversation_id: String,
    pub user_id: String,
    pub role: String,
    pub content: String,
    pub ai_confidence: Option<f64>,
    pub framework_references: String,
    pub source_documents: String,
    pub created_at: Option<String>,
}

impl TryFrom<MessageRow> for Message {
    type Error = serde_json::Error;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            conversation_id: row.conversation_id,
            user_id: row.user_id,
            role: row.role,
            content: row.content,
            ai_confidence: row.ai_confidence,
            framework_references: serde_json::from_str(&row.framework_references)?,
            source_documents: serde_json::from_str(&row.source_documents)?,
            created_at: row.created_at,
        })
    }
}
