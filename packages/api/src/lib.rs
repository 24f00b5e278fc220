//! # API crate: REST client and auth clients for Travel Notes
//!
//! Everything the frontend needs to talk to the backend lives here. Business logic
//! (note storage, plan generation, quotas, preference validation) is server-side;
//! this crate only issues requests and turns responses into typed results.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | The [`AuthClient`] capability, its mock and provider variants, and [`AuthBackend`] which picks one from config |
//! | [`error`] | none | [`ApiError`] and [`AuthError`] |
//! | [`models`] | none | Response DTOs that are not domain models (quota check, acknowledgements) |
//! | [`password`] | none | Reading the reset token from the identity provider's redirect fragment |
//! | `fake_backend` | `fake-backend` or tests | An axum stand-in for the backend, for tests |
//!
//! ## Endpoints wrapped by [`ApiClient`]
//!
//! - **Notes**: `list_notes`, `get_note`, `create_note`, `update_note`, `delete_note`
//! - **Trip plans**: `list_trip_plans`, `can_generate`, `generate_trip_plan`, `rate_trip_plan`
//! - **Preferences**: `preference_options`, `preferences`, `save_preferences`
//! - **Password**: `request_password_reset`, `update_password`
//!
//! Every authenticated call takes the session's access token and sends it as
//! `Authorization: Bearer <token>`. Nothing is retried.

use reqwest::StatusCode;
use serde_json::json;

pub mod auth;
pub mod error;
mod http;
pub mod models;
pub mod password;

#[cfg(any(test, feature = "fake-backend"))]
pub mod fake_backend;

pub use auth::{AuthBackend, AuthClient, AuthResponse, Credentials, Session, SessionUser};
pub use error::{ApiError, AuthError};
pub use models::{Ack, CanGenerate, Generated, NoteSaved, Rated};

pub use store::{
    Note, NoteDraft, NoteId, PlanId, PreferenceOption, PreferenceOptionSet, Rating, TripPlan,
    UserPreferences,
};

use http::{expect_ok, expect_success, read_body, with_bearer};

/// Client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- notes ----

    pub async fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError> {
        let response = with_bearer(self.http.get(self.url("/api/notes")), token)
            .send()
            .await?;
        expect_ok(response, "Failed to load notes").await
    }

    pub async fn get_note(&self, token: &str, id: NoteId) -> Result<Note, ApiError> {
        let response = with_bearer(self.http.get(self.url(&format!("/api/notes/{id}"))), token)
            .send()
            .await?;
        expect_ok(response, "Note not found").await
    }

    pub async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<NoteSaved, ApiError> {
        let response = with_bearer(self.http.post(self.url("/api/notes")), token)
            .json(draft)
            .send()
            .await?;
        expect_success(response, "Failed to save note").await
    }

    pub async fn update_note(
        &self,
        token: &str,
        id: NoteId,
        draft: &NoteDraft,
    ) -> Result<NoteSaved, ApiError> {
        let response = with_bearer(self.http.put(self.url(&format!("/api/notes/{id}"))), token)
            .json(draft)
            .send()
            .await?;
        expect_success(response, "Failed to save note").await
    }

    pub async fn delete_note(&self, token: &str, id: NoteId) -> Result<Ack, ApiError> {
        let response = with_bearer(self.http.delete(self.url(&format!("/api/notes/{id}"))), token)
            .send()
            .await?;
        expect_success(response, "Failed to delete note").await
    }

    // ---- trip plans ----

    pub async fn list_trip_plans(
        &self,
        token: &str,
        note_id: NoteId,
    ) -> Result<Vec<TripPlan>, ApiError> {
        let response = with_bearer(self.http.get(self.url("/api/trip-plans")), token)
            .query(&[("noteId", note_id)])
            .send()
            .await?;
        expect_ok(response, "Failed to load trip plans").await
    }

    pub async fn can_generate(&self, token: &str, note_id: NoteId) -> Result<CanGenerate, ApiError> {
        let response = with_bearer(self.http.get(self.url("/api/trip-plans/can-generate")), token)
            .query(&[("noteId", note_id)])
            .send()
            .await?;
        expect_ok(response, "Failed to check generation status").await
    }

    pub async fn generate_trip_plan(
        &self,
        token: &str,
        note_id: NoteId,
    ) -> Result<Generated, ApiError> {
        let response = with_bearer(self.http.post(self.url("/api/trip-plans/generate")), token)
            .json(&json!({ "noteId": note_id }))
            .send()
            .await?;
        expect_success(response, "Failed to generate trip plan").await
    }

    pub async fn rate_trip_plan(
        &self,
        token: &str,
        plan_id: PlanId,
        rating: Rating,
    ) -> Result<Rated, ApiError> {
        let response = with_bearer(
            self.http.put(self.url(&format!("/api/trip-plans/{plan_id}/rate"))),
            token,
        )
        .json(&json!({ "rating": rating }))
        .send()
        .await?;
        expect_success(response, "Failed to rate trip plan").await
    }

    // ---- preferences ----

    pub async fn preference_options(&self, token: &str) -> Result<PreferenceOptionSet, ApiError> {
        let response = with_bearer(self.http.get(self.url("/api/preferences/options")), token)
            .send()
            .await?;
        expect_ok(response, "Failed to load preference options").await
    }

    /// The saved preferences, or `None` when the user has not set any yet (HTTP 404).
    pub async fn preferences(&self, token: &str) -> Result<Option<UserPreferences>, ApiError> {
        let response = with_bearer(self.http.get(self.url("/api/preferences")), token)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            // Drain the body so the connection can be reused.
            let _ = read_body(response).await;
            return Ok(None);
        }
        expect_ok(response, "Failed to load preferences").await.map(Some)
    }

    pub async fn save_preferences(
        &self,
        token: &str,
        preferences: &UserPreferences,
    ) -> Result<Ack, ApiError> {
        let response = with_bearer(self.http.post(self.url("/api/preferences")), token)
            .json(preferences)
            .send()
            .await?;
        expect_success(response, "Failed to save preferences").await
    }

    // ---- password reset (unauthenticated) ----

    pub async fn request_password_reset(&self, email: &str) -> Result<Ack, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/reset-password-request"))
            .json(&json!({ "email": email }))
            .send()
            .await?;
        expect_ok(response, "Failed to send reset email").await
    }

    pub async fn update_password(
        &self,
        access_token: &str,
        new_password: &str,
    ) -> Result<Ack, ApiError> {
        let response = self
            .http
            .post(self.url("/api/auth/update-password"))
            .json(&json!({ "accessToken": access_token, "newPassword": new_password }))
            .send()
            .await?;
        expect_ok(response, "Failed to reset password").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthClient;
    use crate::fake_backend::FakeBackend;
    use store::MemoryStore;

    async fn sign_in(backend: &FakeBackend) -> String {
        let auth = MockAuthClient::new(backend.base_url(), MemoryStore::new());
        let response = auth
            .sign_in_with_password(&Credentials::new("user@test.com", "password"))
            .await
            .unwrap();
        response.session.unwrap().access_token
    }

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft {
            title: title.into(),
            content: content.into(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/notes"), "http://localhost:8080/api/notes");
    }

    #[tokio::test]
    async fn test_delete_leaves_remaining_notes() {
        let backend = FakeBackend::spawn().await.unwrap();
        let token = sign_in(&backend).await;
        let client = ApiClient::new(backend.base_url());

        let first = client.create_note(&token, &draft("Rome", "Forum")).await.unwrap();
        let second = client.create_note(&token, &draft("Oslo", "Fjords")).await.unwrap();
        assert_eq!(first.message.as_deref(), Some("Note created successfully"));
        let first_id = first.note.unwrap().id;
        let second_id = second.note.unwrap().id;
        assert_eq!((first_id, second_id), (1, 2));

        client.delete_note(&token, second_id).await.unwrap();
        let notes = client.list_notes(&token).await.unwrap();
        assert_eq!(notes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1]);
    }

    #[tokio::test]
    async fn test_update_and_missing_note() {
        let backend = FakeBackend::spawn().await.unwrap();
        let token = sign_in(&backend).await;
        let client = ApiClient::new(backend.base_url());
        let id = backend.state().insert_note("Lyon", "Food");

        let saved = client
            .update_note(&token, id, &draft("Lyon", "Bouchons"))
            .await
            .unwrap();
        assert_eq!(saved.note.map(|n| n.content).as_deref(), Some("Bouchons"));
        assert_eq!(client.get_note(&token, id).await.unwrap().content, "Bouchons");

        let err = client.get_note(&token, 99).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Note not found");
    }

    #[tokio::test]
    async fn test_missing_bearer_is_rejected() {
        let backend = FakeBackend::spawn().await.unwrap();
        let client = ApiClient::new(backend.base_url());
        let err = client.list_notes("not-a-token").await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_preferences_not_found_is_none() {
        let backend = FakeBackend::spawn().await.unwrap();
        let token = sign_in(&backend).await;
        let client = ApiClient::new(backend.base_url());

        assert_eq!(client.preferences(&token).await.unwrap(), None);

        let prefs = UserPreferences {
            budget: Some("LUXURY".into()),
            transport: vec!["TRAIN".into()],
            ..Default::default()
        };
        client.save_preferences(&token, &prefs).await.unwrap();
        assert_eq!(client.preferences(&token).await.unwrap(), Some(prefs));

        let options = client.preference_options(&token).await.unwrap();
        assert_eq!(options.pace.len(), 3);
        assert_eq!(options.season.last().map(|o| o.label.as_str()), Some("Any Season"));
    }

    #[tokio::test]
    async fn test_generation_gate_and_quota() {
        let backend = FakeBackend::spawn().await.unwrap();
        let token = sign_in(&backend).await;
        let client = ApiClient::new(backend.base_url());
        let note_id = backend.state().insert_note("Kyoto", "Temples");

        let gate = client.can_generate(&token, note_id).await.unwrap();
        assert!(!gate.can_generate);
        assert!(gate.missing_preferences);
        assert!(!gate.limit_exceeded);

        {
            let mut state = backend.state();
            state.complete_preferences();
            state.daily_limit = 1;
        }
        let gate = client.can_generate(&token, note_id).await.unwrap();
        assert!(gate.can_generate);
        assert_eq!((gate.remaining_usage, gate.daily_limit), (Some(1), Some(1)));

        let generated = client.generate_trip_plan(&token, note_id).await.unwrap();
        assert_eq!(generated.remaining_usage, Some(0));
        let plan = generated.trip_plan.unwrap();
        assert_eq!(plan.note_id, note_id);
        assert!(!plan.is_rated());

        let gate = client.can_generate(&token, note_id).await.unwrap();
        assert!(gate.limit_exceeded);
        assert_eq!(
            gate.reason.as_deref(),
            Some("Daily AI usage limit exceeded (1 plans per day)")
        );

        let err = client.generate_trip_plan(&token, note_id).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(client.list_trip_plans(&token, note_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_rating_updates_one_plan() {
        let backend = FakeBackend::spawn().await.unwrap();
        let token = sign_in(&backend).await;
        let client = ApiClient::new(backend.base_url());
        let (first, second) = {
            let mut state = backend.state();
            let note = state.insert_note("Porto", "Wine");
            (state.insert_plan(note, "Day 1", 0), state.insert_plan(note, "Day 2", 2))
        };

        let rated = client
            .rate_trip_plan(&token, first, Rating::new(4).unwrap())
            .await
            .unwrap();
        assert_eq!(rated.trip_plan.map(|p| p.rating), Some(4));
        assert_eq!(backend.state().plans[&second].rating, 2);

        let err = client
            .rate_trip_plan(&token, 42, Rating::new(1).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Trip plan not found");
    }

    #[tokio::test]
    async fn test_password_reset_calls() {
        let backend = FakeBackend::spawn().await.unwrap();
        let client = ApiClient::new(backend.base_url());

        client.request_password_reset("user@test.com").await.unwrap();
        client.update_password("reset-token", "hunter22").await.unwrap();
        let err = client.update_password("reset-token", "abc").await.unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");

        let state = backend.state();
        assert_eq!(state.reset_requests, vec!["user@test.com".to_string()]);
        assert_eq!(
            state.password_updates,
            vec![("reset-token".to_string(), "hunter22".to_string())]
        );
    }
}
