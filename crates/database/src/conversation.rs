//! Conversation persistence (SQLite).

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{Conversation, NewConversation};

/// Insert a conversation and return the stored row.
pub async fn create_conversation(
    pool: &SqlitePool,
    conversation: &NewConversation,
) -> Result<Conversation> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO conversations (id, user_id, company_id, title, category)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&conversation.user_id)
    .bind(&conversation.company_id)
    .bind(&conversation.title)
    .bind(&conversation.category)
    .execute(pool)
    .await?;

    get_conversation(pool, &id).await
}

/// Get a conversation by ID.
pub async fn get_conversation(pool: &SqlitePool, id: &str) -> Result<Conversation> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, company_id, title, category, created_at
        FROM conversations
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Conversation",
        id: id.to_string(),
    })
}

/// List a user's conversations, newest first.
pub async fn list_conversations_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<Conversation>> {
    let rows = sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_id, company_id, title, category, created_at
        FROM conversations
        WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
