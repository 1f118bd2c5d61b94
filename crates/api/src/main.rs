//! vCISO API server.

use std::sync::Arc;

use claude_brain::ClaudeBrain;
use database::{ConversationStore, SqliteStore, SupabaseStore};
use orchestrator::Orchestrator;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vciso_api::{AppState, Config, SupabaseTokenVerifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(addr = %config.addr, model = %config.provider.model, "Starting vCISO API server");

    let brain = ClaudeBrain::new(config.provider.clone())?;

    let store: Arc<dyn ConversationStore> = match &config.database_url {
        Some(url) => Arc::new(SqliteStore::connect(url).await?),
        None => Arc::new(SupabaseStore::new(
            &config.supabase_url,
            config.supabase_service_role_key.clone(),
        )?),
    };
    info!(store = store.name(), "Conversation store ready");

    let verifier = SupabaseTokenVerifier::new(
        &config.supabase_url,
        config.supabase_service_role_key.clone(),
    )?;

    info!(prompt_mode = config.prompt_mode.as_str(), "Advisor prompt selected");
    let orchestrator =
        Orchestrator::new(Arc::new(brain), store).with_prompt_mode(config.prompt_mode);
    let state = AppState::new(orchestrator, Arc::new(verifier));
    let app = vciso_api::app(state);

    info!(addr = %config.addr, "vCISO API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
