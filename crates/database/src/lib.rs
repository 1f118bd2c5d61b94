//! Conversation persistence for the vCISO backend.
//!
//! The request pipeline talks to a [`ConversationStore`]. Two
//! implementations are provided:
//!
//! - [`SupabaseStore`] - inserts rows through Supabase's PostgREST API
//!   (production)
//! - [`SqliteStore`] - SQLx with SQLite (local development and tests)
//!
//! # Example
//!
//! ```no_run
//! use database::{ConversationStore, NewConversation, NewMessage, SqliteStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteStore::connect("sqlite:vciso.db?mode=rwc").await?;
//!
//!     let conversation = NewConversation::from_first_message("user-1", None, "What is CMMC?");
//!     let id = store.create_conversation(&conversation).await?;
//!     store
//!         .insert_message(&NewMessage::assistant(&id, "user-1", "CMMC is...", 0.8, vec![], vec![]))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod conversation;
pub mod error;
pub mod message;
pub mod models;
pub mod store;
pub mod supabase;

pub use error::{DatabaseError, Result};
pub use models::{conversation_title, Conversation, Message, NewConversation, NewMessage};
pub use store::{ConversationStore, SqliteStore};
pub use supabase::SupabaseStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for an in-memory database.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
