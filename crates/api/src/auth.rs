//! Bearer token verification.
//!
//! Handlers that require a signed-in user take an [`AuthenticatedUser`]
//! argument. The extractor pulls the bearer token from the `Authorization`
//! header and asks the configured [`TokenVerifier`] who it belongs to.

use std::time::Duration;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Timeout for identity lookups.
const VERIFY_TIMEOUT_SECS: u64 = 30;

/// The user a bearer token belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Why a request could not be authenticated.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("identity service rejected token ({0})")]
    Rejected(u16),

    #[error("identity service unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("identity response has no user id")]
    MalformedIdentity,
}

/// Resolves a bearer token to a user.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<UserIdentity, AuthError>;
}

/// Verifies tokens against Supabase auth (`GET {url}/auth/v1/user`).
#[derive(Debug, Clone)]
pub struct SupabaseTokenVerifier {
    client: Client,
    user_url: String,
    api_key: String,
}

impl SupabaseTokenVerifier {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(VERIFY_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            user_url: format!("{}/auth/v1/user", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }
}

#[derive(Deserialize)]
struct UserPayload {
    id: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[async_trait]
impl TokenVerifier for SupabaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<UserIdentity, AuthError> {
        let response = self
            .client
            .get(&self.user_url)
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected(status.as_u16()));
        }

        let payload: UserPayload = response
            .json()
            .await
            .map_err(|_| AuthError::MalformedIdentity)?;

        match payload.id.filter(|id| !id.is_empty()) {
            Some(id) => Ok(UserIdentity {
                id,
                email: payload.email,
            }),
            None => Err(AuthError::MalformedIdentity),
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// A request whose bearer token was verified.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserIdentity);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;
        let identity = state.verifier.verify(token).await?;
        debug!("Authenticated user {}", identity.id);
        Ok(Self(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
    }

    #[test]
    fn test_bearer_token_rejects_other_forms() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("abc")), None);
    }

    #[test]
    fn test_user_url() {
        let verifier = SupabaseTokenVerifier::new("https://x.supabase.co/", "key").unwrap();
        assert_eq!(verifier.user_url, "https://x.supabase.co/auth/v1/user");
    }
}
