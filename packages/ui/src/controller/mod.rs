//! # Page controllers
//!
//! [`Controller`] holds the two collaborators every page talks to, the auth client
//! and the REST client, and exposes one async method per user action. Methods
//! follow the same shape:
//!
//! 1. Read the session from the auth client. None means [`PageError::AuthMissing`].
//! 2. Run client-side validation before touching the network.
//! 3. Issue the request with the session's bearer token.
//! 4. On success, refetch whatever list the action changed and return it whole.
//!
//! Nothing here mutates page state. Components apply the returned values to their
//! view-models, so a failed action leaves the page exactly as it was.
//!
//! | File | Pages |
//! |------|-------|
//! | `account` | login, register, landing, logout, forgot/reset password |
//! | `notes` | notes list and editor |
//! | `trip_plans` | trip-plan detail: note, plans, generation gate, rating |
//! | `profile` | travel preferences |

use api::{ApiClient, AuthClient, Session};

use crate::PageError;

mod account;
mod notes;
mod profile;
mod trip_plans;

pub use account::RegisterOutcome;
pub use trip_plans::{DetailPage, Generation};

pub struct Controller<'a, A> {
    auth: &'a A,
    api: &'a ApiClient,
}

impl<'a, A: AuthClient> Controller<'a, A> {
    pub fn new(auth: &'a A, api: &'a ApiClient) -> Self {
        Self { auth, api }
    }

    /// The stored session, if any. A failing read counts as signed out.
    pub async fn current_session(&self) -> Option<Session> {
        match self.auth.get_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("Session check failed: {}", e);
                None
            }
        }
    }

    async fn token(&self) -> Result<String, PageError> {
        self.current_session()
            .await
            .map(|session| session.access_token)
            .ok_or(PageError::AuthMissing)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use api::auth::MockAuthClient;
    use api::fake_backend::FakeBackend;
    use api::{ApiClient, AuthClient, Credentials};
    use store::MemoryStore;

    /// A fake backend plus clients pointed at it.
    pub struct Harness {
        pub backend: FakeBackend,
        pub auth: MockAuthClient<MemoryStore>,
        pub api: ApiClient,
    }

    impl Harness {
        pub async fn anonymous() -> Self {
            let backend = FakeBackend::spawn().await.unwrap();
            let auth = MockAuthClient::new(backend.base_url(), MemoryStore::new());
            let api = ApiClient::new(backend.base_url());
            Self { backend, auth, api }
        }

        pub async fn signed_in() -> Self {
            let harness = Self::anonymous().await;
            harness
                .auth
                .sign_in_with_password(&Credentials::new("user@test.com", "password"))
                .await
                .unwrap();
            harness
        }

        pub fn controller(&self) -> super::Controller<'_, MockAuthClient<MemoryStore>> {
            super::Controller::new(&self.auth, &self.api)
        }
    }
}
