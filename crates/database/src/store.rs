//! The `ConversationStore` capability and its SQLite implementation.

use async_trait::async_trait;

use crate::models::{Message, NewConversation, NewMessage};
use crate::{conversation, message, Database, Result};

/// Persistence capability used by the request pipeline.
///
/// Inserts are independent: there is no transaction spanning a conversation
/// insert and the message insert that follows it.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Insert a conversation row and return its generated ID.
    async fn create_conversation(&self, conversation: &NewConversation) -> Result<String>;

    /// Insert a message row.
    async fn insert_message(&self, message: &NewMessage) -> Result<()>;

    /// Read back the messages of a conversation.
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>>;

    /// Human-readable name used in logs.
    fn name(&self) -> &str;
}

/// Store backed by a local SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Wrap a connected, migrated database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Connect to `url`, run migrations, and wrap the result.
    pub async fn connect(url: &str) -> Result<Self> {
        let db = Database::connect(url).await?;
        db.migrate().await?;
        Ok(Self::new(db))
    }

    /// Get the underlying database.
    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ConversationStore for SqliteStore {
    async fn create_conversation(&self, new: &NewConversation) -> Result<String> {
        let row = conversation::create_conversation(self.db.pool(), new).await?;
        Ok(row.id)
    }

    async fn insert_message(&self, new: &NewMessage) -> Result<()> {
        message::insert_message(self.db.pool(), new).await?;
        Ok(())
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        message::list_messages(self.db.pool(), conversation_id).await
    }

    fn name(&self) -> &str {
        "SqliteStore"
    }
}
