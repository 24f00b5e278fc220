//! Mock auth client for local development.
//!
//! Talks to the backend's `/api/mock-auth/{login,register,logout}` endpoints and keeps
//! the returned `{user, session}` in a [`SessionStore`] under [`MOCK_SESSION_KEY`].
//! States are just "no stored session" and "stored session"; sign-in and sign-up move
//! to the latter, sign-out always back to the former.

use store::{KeyValueStore, SessionStore};

use super::session::{Session, StoredSession, MOCK_SESSION_KEY};
use super::{AuthClient, AuthResponse, Credentials};
use crate::error::AuthError;
use crate::http::{message_of, read_body, with_bearer};

/// Mock auth client backed by the local backend.
#[derive(Debug, Clone)]
pub struct MockAuthClient<S> {
    http: reqwest::Client,
    base_url: String,
    store: SessionStore<S>,
}

impl<S: KeyValueStore> MockAuthClient<S> {
    pub fn new(base_url: &str, backend: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store: SessionStore::new(backend, MOCK_SESSION_KEY),
        }
    }

    fn url(&self, action: &str) -> String {
        format!("{}/api/mock-auth/{}", self.base_url, action)
    }

    async fn authenticate(
        &self,
        action: &str,
        credentials: &Credentials,
        fallback: &str,
    ) -> Result<AuthResponse, AuthError> {
        let response = self
            .http
            .post(self.url(action))
            .json(credentials)
            .send()
            .await?;
        let (status, body) = read_body(response)
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::new(
                message_of(&body).unwrap_or_else(|| fallback.to_string()),
            ));
        }

        let stored: StoredSession =
            serde_json::from_value(body).map_err(|e| AuthError::new(e.to_string()))?;
        self.store.save(&stored).await;

        Ok(AuthResponse {
            user: stored.user,
            session: stored.session,
        })
    }
}

impl<S: KeyValueStore> AuthClient for MockAuthClient<S> {
    async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthResponse, AuthError> {
        tracing::info!("[AUTH] Attempting mock login for {}", credentials.email);
        self.authenticate("login", credentials, "Login failed").await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        tracing::info!("[AUTH] Attempting mock registration for {}", credentials.email);
        self.authenticate("register", credentials, "Registration failed")
            .await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.get_session().await? {
            let request = with_bearer(self.http.post(self.url("logout")), &session.access_token);
            match request.send().await {
                Ok(response) if response.status().is_success() => {}
                Ok(response) => {
                    tracing::warn!("Mock logout returned {}", response.status());
                }
                Err(e) => {
                    tracing::warn!("Mock logout failed: {}", e);
                }
            }
        }

        self.store.clear().await;
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self
            .store
            .load::<StoredSession>()
            .await
            .and_then(|stored| stored.session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_backend::FakeBackend;
    use store::MemoryStore;

    #[tokio::test]
    async fn test_sign_in_persists_issued_token() {
        let backend = FakeBackend::spawn().await.unwrap();
        let client = MockAuthClient::new(backend.base_url(), MemoryStore::new());
        assert_eq!(client.get_session().await, Ok(None));

        for (email, password) in [("user@test.com", "password"), ("dev@test.com", "dev")] {
            let response = client
                .sign_in_with_password(&Credentials::new(email, password))
                .await
                .unwrap();
            let issued = response.session.unwrap();
            let stored = client.get_session().await.unwrap().unwrap();
            assert_eq!(stored.access_token, issued.access_token);
            assert_eq!(stored.user.email, email);
        }
    }

    #[tokio::test]
    async fn test_failed_sign_in_keeps_previous_state() {
        let backend = FakeBackend::spawn().await.unwrap();
        let client = MockAuthClient::new(backend.base_url(), MemoryStore::new());

        let err = client
            .sign_in_with_password(&Credentials::new("user@test.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Email or password is incorrect");
        assert_eq!(client.get_session().await, Ok(None));
    }

    #[tokio::test]
    async fn test_sign_up_is_immediately_usable() {
        let backend = FakeBackend::spawn().await.unwrap();
        let client = MockAuthClient::new(backend.base_url(), MemoryStore::new());

        let response = client
            .sign_up(&Credentials::new("new@test.com", "secret"))
            .await
            .unwrap();
        assert!(response.session.is_some());
        assert!(client.get_session().await.unwrap().is_some());

        let err = client
            .sign_up(&Credentials::new("user@test.com", "secret"))
            .await
            .unwrap_err();
        assert_eq!(err.message, "A user with this email already exists");
    }

    #[tokio::test]
    async fn test_sign_out_clears_even_when_revoke_fails() {
        let backend = FakeBackend::spawn().await.unwrap();
        let client = MockAuthClient::new(backend.base_url(), MemoryStore::new());

        for fail_logout in [false, true] {
            backend.state().fail_logout = fail_logout;
            client
                .sign_in_with_password(&Credentials::new("user@test.com", "password"))
                .await
                .unwrap();
            assert_eq!(client.sign_out().await, Ok(()));
            assert_eq!(client.get_session().await, Ok(None));
        }
        assert_eq!(backend.state().logout_calls, 2);
    }

    #[tokio::test]
    async fn test_sign_out_when_backend_unreachable() {
        let store = MemoryStore::new();
        let backend = FakeBackend::spawn().await.unwrap();
        MockAuthClient::new(backend.base_url(), store.clone())
            .sign_in_with_password(&Credentials::new("user@test.com", "password"))
            .await
            .unwrap();

        let offline = MockAuthClient::new("http://127.0.0.1:9", store);
        assert!(offline.get_session().await.unwrap().is_some());
        assert_eq!(offline.sign_out().await, Ok(()));
        assert_eq!(offline.get_session().await, Ok(None));
    }

    #[tokio::test]
    async fn test_corrupted_session_reads_as_anonymous() {
        let store = MemoryStore::new();
        store.set(MOCK_SESSION_KEY, "{not json").await;
        let client = MockAuthClient::new("http://127.0.0.1:9", store.clone());
        assert_eq!(client.get_session().await, Ok(None));

        store.set(MOCK_SESSION_KEY, r#"{"user":null,"session":null}"#).await;
        assert_eq!(client.get_session().await, Ok(None));
    }
}
