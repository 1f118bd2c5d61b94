//! Store backed by Supabase's PostgREST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{DatabaseError, Result};
use crate::models::{Message, NewConversation, NewMessage};
use crate::store::ConversationStore;

/// Default timeout for store requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONVERSATIONS: &str = "conversations";
const MESSAGES: &str = "messages";

/// Conversation store that inserts rows through `{url}/rest/v1/<table>`.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    rest_url: String,
    service_key: String,
}

impl SupabaseStore {
    /// Create a store for the project at `base_url` using a service-role key.
    pub fn new(base_url: &str, service_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                DatabaseError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            rest_url: format!("{}/rest/v1", base_url.trim_end_matches('/')),
            service_key: service_key.into(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
    }

    async fn insert<T: Serialize + Sync>(
        &self,
        table: &'static str,
        row: &T,
        prefer: &str,
    ) -> Result<Response> {
        debug!("Inserting row into {}", table);

        let response = self
            .authorized(self.client.post(self.table_url(table)))
            .header("Prefer", prefer)
            .json(row)
            .send()
            .await?;

        check_status(table, response).await
    }
}

async fn check_status(table: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    error!("Store rejected {} request: {} - {}", table, status.as_u16(), message);
    Err(DatabaseError::Rejected {
        table,
        status: status.as_u16(),
        message,
    })
}

/// Extract the `id` of the first returned row as a string.
fn first_row_id(rows: &[Value]) -> Option<String> {
    match rows.first()?.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[async_trait]
impl ConversationStore for SupabaseStore {
    async fn create_conversation(&self, conversation: &NewConversation) -> Result<String> {
        let response = self
            .insert(CONVERSATIONS, conversation, "return=representation")
            .await?;
        let rows: Vec<Value> = response.json().await?;

        first_row_id(&rows).ok_or(DatabaseError::EmptyInsert {
            entity: "conversation",
        })
    }

    async fn insert_message(&self, message: &NewMessage) -> Result<()> {
        self.insert(MESSAGES, message, "return=minimal").await?;
        Ok(())
    }

    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let response = self
            .authorized(self.client.get(self.table_url(MESSAGES)))
            .query(&[
                ("select", "*".to_string()),
                ("conversation_id", format!("eq.{}", conversation_id)),
                ("order", "created_at.asc".to_string()),
            ])
            .send()
            .await?;

        let response = check_status(MESSAGES, response).await?;
        Ok(response.json().await?)
    }

    fn name(&self) -> &str {
        "SupabaseStore"
    }
}
