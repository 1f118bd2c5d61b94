//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use brain_core::BrainError;
use claude_brain::ClaudeBrainConfig;
use orchestrator::PromptMode;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Provider settings (`ANTHROPIC_*`).
    pub provider: ClaudeBrainConfig,
    /// Supabase project URL, used for the store and token verification.
    pub supabase_url: String,
    /// Supabase service-role key.
    pub supabase_service_role_key: String,
    /// Optional `sqlite:` URL; selects the local SQLite store when set.
    pub database_url: Option<String>,
    /// Base advisor prompt.
    pub prompt_mode: PromptMode,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `VCISO_API_ADDR` | Server bind address | `0.0.0.0:8000` |
    /// | `ANTHROPIC_API_KEY` | Provider API key | (required) |
    /// | `SUPABASE_URL` | Supabase project URL | (required) |
    /// | `SUPABASE_SERVICE_ROLE_KEY` | Supabase service key | (required) |
    /// | `DATABASE_URL` | Local SQLite store URL | (unset) |
    /// | `VCISO_PROMPT_MODE` | `general`, `compliance` or `risk` | `general` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("VCISO_API_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let provider = ClaudeBrainConfig::from_env()?;
        let supabase_url = required("SUPABASE_URL")?;
        let supabase_service_role_key = required("SUPABASE_SERVICE_ROLE_KEY")?;
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let prompt_mode = match env::var("VCISO_PROMPT_MODE") {
            Ok(tag) if !tag.trim().is_empty() => {
                tag.parse().map_err(ConfigError::InvalidPromptMode)?
            }
            _ => PromptMode::default(),
        };

        Ok(Self {
            addr,
            provider,
            supabase_url,
            supabase_service_role_key,
            database_url,
            prompt_mode,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid VCISO_API_ADDR format")]
    InvalidAddr,

    #[error("Invalid VCISO_PROMPT_MODE: {0}")]
    InvalidPromptMode(String),

    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error(transparent)]
    Provider(#[from] BrainError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "VCISO_API_ADDR",
        "ANTHROPIC_API_KEY",
        "SUPABASE_URL",
        "SUPABASE_SERVICE_ROLE_KEY",
        "DATABASE_URL",
        "VCISO_PROMPT_MODE",
    ];

    fn clear() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn set_required() {
        env::set_var("ANTHROPIC_API_KEY", "sk-test");
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "service-key");
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();

        clear();
        set_required();
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.provider.api_key, "sk-test");
        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert!(config.database_url.is_none());
        assert_eq!(config.prompt_mode, PromptMode::General);

        env::set_var("VCISO_API_ADDR", "127.0.0.1:9000");
        env::set_var("DATABASE_URL", "sqlite::memory:");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.database_url.as_deref(), Some("sqlite::memory:"));

        env::set_var("VCISO_PROMPT_MODE", "compliance");
        assert_eq!(Config::from_env().unwrap().prompt_mode, PromptMode::Compliance);

        env::set_var("VCISO_PROMPT_MODE", "audit");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPromptMode(_)));
        assert!(err.to_string().contains("unknown prompt mode: audit"));
        env::remove_var("VCISO_PROMPT_MODE");

        env::set_var("VCISO_API_ADDR", "not-an-addr");
        assert!(matches!(Config::from_env(), Err(ConfigError::InvalidAddr)));

        clear();
        set_required();
        env::set_var("SUPABASE_SERVICE_ROLE_KEY", "  ");
        let err = Config::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "SUPABASE_SERVICE_ROLE_KEY environment variable is required"
        );

        clear();
        set_required();
        env::remove_var("ANTHROPIC_API_KEY");
        assert!(matches!(Config::from_env(), Err(ConfigError::Provider(_))));

        clear();
    }
}
