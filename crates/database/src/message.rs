//! Message persistence (SQLite).

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Message, MessageRow, NewMessage};
use crate::Result;

/// Insert a message and return its generated ID.
pub async fn insert_message(pool: &SqlitePool, message: &NewMessage) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    let framework_references = serde_json::to_string(&message.framework_references)?;
    let source_documents = serde_json::to_string(&message.source_documents)?;

    sqlx::query(
        r#"
        INSERT INTO messages (
            id, conversation_id, user_id, role, content,
            ai_confidence, framework_references, source_documents
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&message.conversation_id)
    .bind(&message.user_id)
    .bind(&message.role)
    .bind(&message.content)
    .bind(message.ai_confidence)
    .bind(framework_references)
    .bind(source_documents)
    .execute(pool)
    .await?;

    Ok(id)
}

/// List the messages of a conversation in insertion order.
pub async fn list_messages(pool: &SqlitePool, conversation_id: &str) -> Result<Vec<Message>> {
    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, conversation_id, user_id, role, content,
               ai_confidence, framework_references, source_documents, created_at
        FROM messages
        WHERE conversation_id = ?
        ORDER BY created_at ASC, rowid ASC
        "#,
    )
    .bind(conversation_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| Message::try_from(row).map_err(Into::into))
        .collect()
}
