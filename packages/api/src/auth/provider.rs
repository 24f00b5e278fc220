//! Identity-provider auth client.
//!
//! Speaks the provider's password-grant REST surface directly:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | sign in | `POST {url}/auth/v1/token?grant_type=password` |
//! | sign up | `POST {url}/auth/v1/signup` |
//! | sign out | `POST {url}/auth/v1/logout` with the user's bearer token |
//!
//! Every request carries the project's anon key in the `apikey` header. Sign-up may
//! answer with just the user when email confirmation is pending; no session is stored
//! in that case. Refresh tokens are kept but never used.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{KeyValueStore, SessionStore};

use super::session::{Session, SessionUser, PROVIDER_SESSION_KEY};
use super::{AuthClient, AuthResponse, Credentials};
use crate::error::AuthError;
use crate::http::{read_body, with_bearer};

/// Token grant as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProviderSession {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: SessionUser,
}

impl ProviderSession {
    fn session(&self) -> Session {
        Session {
            access_token: self.access_token.clone(),
            user: self.user.clone(),
        }
    }
}

/// Provider errors come in a few shapes depending on the endpoint.
fn provider_message(body: &Value) -> Option<String> {
    ["error_description", "msg", "message", "error"]
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|text| !text.trim().is_empty())
        .map(str::to_string)
}

/// Auth client backed by the external identity provider.
#[derive(Debug, Clone)]
pub struct ProviderAuthClient<S> {
    http: reqwest::Client,
    url: String,
    anon_key: String,
    store: SessionStore<S>,
}

impl<S: KeyValueStore> ProviderAuthClient<S> {
    pub fn new(url: &str, anon_key: &str, backend: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            store: SessionStore::new(backend, PROVIDER_SESSION_KEY),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    async fn post(
        &self,
        path: &str,
        credentials: &Credentials,
        fallback: &str,
    ) -> Result<Value, AuthError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .header("apikey", &self.anon_key)
            .json(credentials)
            .send()
            .await?;
        let (status, body) = read_body(response)
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthError::new(
                provider_message(&body).unwrap_or_else(|| fallback.to_string()),
            ));
        }
        Ok(body)
    }

    async fn persist(&self, body: Value) -> Result<AuthResponse, AuthError> {
        let grant: ProviderSession =
            serde_json::from_value(body).map_err(|e| AuthError::new(e.to_string()))?;
        self.store.save(&grant).await;
        Ok(AuthResponse {
            user: Some(grant.user.clone()),
            session: Some(grant.session()),
        })
    }
}

impl<S: KeyValueStore> AuthClient for ProviderAuthClient<S> {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, AuthError> {
        tracing::info!("[AUTH] Attempting login for {}", credentials.email);
        let body = self
            .post("token?grant_type=password", credentials, "Login failed")
            .await?;
        self.persist(body).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        tracing::info!("[AUTH] Attempting registration for {}", credentials.email);
        let body = self.post("signup", credentials, "Registration failed").await?;

        if body.get("access_token").is_some() {
            return self.persist(body).await;
        }

        // Confirmation pending: the body is the user, sometimes wrapped.
        let user_value = body.get("user").cloned().unwrap_or(body);
        let user: SessionUser =
            serde_json::from_value(user_value).map_err(|e| AuthError::new(e.to_string()))?;
        Ok(AuthResponse {
            user: Some(user),
            session: None,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.get_session().await? {
            let request = with_bearer(self.http.post(self.endpoint("logout")), &session.access_token)
                .header("apikey", &self.anon_key);
            match request.send().await {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => tracing::warn!("Provider logout returned {}", response.status()),
                Err(e) => tracing::warn!("Provider logout failed: {}", e),
            }
        }

        self.store.clear().await;
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self
            .store
            .load::<ProviderSession>()
            .await
            .map(|grant| grant.session()))
    }
}
