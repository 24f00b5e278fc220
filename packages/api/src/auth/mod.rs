//! # Authentication clients
//!
//! [`AuthClient`] is the one capability every page uses to sign users in and find out
//! who is signed in. Two implementations conform to it:
//!
//! | Variant | Type | Talks to | Persists under |
//! |---------|------|----------|----------------|
//! | Mock | [`MockAuthClient`] | the backend's `/api/mock-auth/*` endpoints | [`MOCK_SESSION_KEY`] |
//! | Provider | [`ProviderAuthClient`] | the identity provider's `/auth/v1/*` REST API | [`PROVIDER_SESSION_KEY`] |
//!
//! [`AuthBackend`] wraps either one and is built once at startup from
//! [`store::ClientConfig`]; callers never inspect which variant they hold.
//!
//! ## Contract
//!
//! - Every operation returns a `Result`; transport and provider failures become an
//!   [`AuthError`] with a user-facing message. Nothing panics across this boundary.
//! - A successful sign-in (or a sign-up that yields a usable session) overwrites the
//!   persisted session wholesale.
//! - `sign_out` attempts the remote revoke, logs any failure, and then clears the local
//!   session unconditionally.
//! - `get_session` is a pure read. Absence is `Ok(None)`; so is a stored value that no
//!   longer parses.
//! - Sessions are never refreshed or expired client-side.

use std::future::Future;

use serde::Serialize;
use store::{AuthMode, ClientConfig, ConfigError, KeyValueStore};

use crate::error::AuthError;

mod mock;
mod provider;
mod session;

pub use mock::MockAuthClient;
pub use provider::ProviderAuthClient;
pub use session::{Session, SessionUser, MOCK_SESSION_KEY, PROVIDER_SESSION_KEY};

/// Email and password as typed into a login or register form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Result of a sign-in or sign-up. `session` is `None` when the provider still needs
/// the user to confirm their email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: Option<SessionUser>,
    pub session: Option<Session>,
}

/// The auth capability shared by every client variant.
pub trait AuthClient {
    fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>>;
    fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, AuthError>>;
    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;
    fn get_session(&self) -> impl Future<Output = Result<Option<Session>, AuthError>>;
}

/// The auth client chosen by configuration.
#[derive(Debug, Clone)]
pub enum AuthBackend<S> {
    Mock(MockAuthClient<S>),
    Provider(ProviderAuthClient<S>),
}

impl<S: KeyValueStore> AuthBackend<S> {
    /// Build the variant named by `config.auth.mode`. `api_base_url` is where the mock
    /// endpoints live; the provider uses its own URL from the config.
    pub fn from_config(
        config: &ClientConfig,
        api_base_url: &str,
        backend: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match config.auth.mode {
            AuthMode::Mock => {
                tracing::info!("Using mock authentication");
                AuthBackend::Mock(MockAuthClient::new(api_base_url, backend))
            }
            AuthMode::Provider => {
                tracing::info!("Using identity provider at {}", config.auth.provider_url);
                AuthBackend::Provider(ProviderAuthClient::new(
                    &config.auth.provider_url,
                    &config.auth.anon_key,
                    backend,
                ))
            }
        })
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            AuthBackend::Mock(_) => AuthMode::Mock,
            AuthBackend::Provider(_) => AuthMode::Provider,
        }
    }
}

impl<S: KeyValueStore> AuthClient for AuthBackend<S> {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, AuthError> {
        match self {
            AuthBackend::Mock(client) => client.sign_in_with_password(credentials).await,
            AuthBackend::Provider(client) => client.sign_in_with_password(credentials).await,
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        match self {
            AuthBackend::Mock(client) => client.sign_up(credentials).await,
            AuthBackend::Provider(client) => client.sign_up(credentials).await,
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        match self {
            AuthBackend::Mock(client) => client.sign_out().await,
            AuthBackend::Provider(client) => client.sign_out().await,
        }
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        match self {
            AuthBackend::Mock(client) => client.get_session().await,
            AuthBackend::Provider(client) => client.get_session().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_backend_follows_config_mode() {
        let config = ClientConfig::default();
        let backend = AuthBackend::from_config(&config, "http://localhost:8080", MemoryStore::new())
            .unwrap();
        assert_eq!(backend.mode(), AuthMode::Mock);

        let mut config = ClientConfig::default();
        config.auth.mode = AuthMode::Provider;
        config.auth.provider_url = "https://example.supabase.co".into();
        config.auth.anon_key = "anon".into();
        let backend = AuthBackend::from_config(&config, "http://localhost:8080", MemoryStore::new())
            .unwrap();
        assert_eq!(backend.mode(), AuthMode::Provider);
    }

    #[test]
    fn test_provider_without_credentials_is_rejected() {
        let mut config = ClientConfig::default();
        config.auth.mode = AuthMode::Provider;
        let result = AuthBackend::from_config(&config, "", MemoryStore::new());
        assert!(matches!(result, Err(ConfigError::MissingProvider)));
    }

    #[test]
    fn test_credentials_serialise_as_login_body() {
        let body = serde_json::to_value(Credentials::new("user@test.com", "password")).unwrap();
        assert_eq!(body, serde_json::json!({"email": "user@test.com", "password": "password"}));
    }
}
