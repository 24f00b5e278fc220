//! # In-process fake of the Travel Notes backend
//!
//! [`FakeBackend::spawn`] binds an axum router to `127.0.0.1:0` on the current tokio
//! runtime and returns its base URL. It serves every endpoint the client calls, with
//! the same status codes and JSON shapes as the real backend:
//!
//! | Area | Routes |
//! |------|--------|
//! | Mock auth | `POST /api/mock-auth/{login,register,logout}` |
//! | Identity provider | `POST /auth/v1/token?grant_type=password`, `POST /auth/v1/{signup,logout}` (need the `apikey` header) |
//! | Notes | `GET/POST /api/notes`, `GET/PUT/DELETE /api/notes/{id}` |
//! | Trip plans | `GET /api/trip-plans?noteId=`, `GET /api/trip-plans/can-generate?noteId=`, `POST /api/trip-plans/generate`, `PUT /api/trip-plans/{id}/rate` |
//! | Preferences | `GET/POST /api/preferences`, `GET /api/preferences/options` |
//! | Password | `POST /api/auth/reset-password-request`, `POST /api/auth/update-password` |
//!
//! Tests steer it through [`FakeBackend::state`]: seed notes and plans, set the daily
//! quota, make logout fail, hold provider sign-ups for email confirmation, inspect
//! what was received.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use store::{Note, NoteId, PlanId, PreferenceOption, PreferenceOptionSet, TripPlan, UserPreferences};

/// Preferences a user needs before plans can be generated.
pub const MIN_FILLED_PREFERENCES: usize = 3;

/// Everything the fake backend knows. Fields are public so tests can seed and inspect.
#[derive(Debug)]
pub struct FakeState {
    pub users: HashMap<String, String>,
    /// access token -> email
    pub sessions: HashMap<String, String>,
    pub notes: BTreeMap<NoteId, Note>,
    pub plans: BTreeMap<PlanId, TripPlan>,
    pub preferences: Option<UserPreferences>,
    pub daily_limit: u32,
    pub used_today: u32,
    pub fail_logout: bool,
    /// `GET /api/notes` answers 500 while set.
    pub fail_note_list: bool,
    pub logout_calls: usize,
    pub reset_requests: Vec<String>,
    pub password_updates: Vec<(String, String)>,
    /// Value the provider routes expect in `apikey`.
    pub anon_key: String,
    /// Provider sign-ups answer with the user only, no session.
    pub confirm_signups: bool,
    /// While confirming, wrap the user as `{"user": ...}` instead of sending it bare.
    pub wrap_pending_user: bool,
    pub provider_logouts: usize,
    next_token: u64,
    next_note_id: NoteId,
    next_plan_id: PlanId,
}

impl Default for FakeState {
    fn default() -> Self {
        let users = [
            ("user@test.com", "password"),
            ("admin@test.com", "admin"),
            ("dev@test.com", "dev"),
        ]
        .into_iter()
        .map(|(email, password)| (email.to_string(), password.to_string()))
        .collect();

        Self {
            users,
            sessions: HashMap::new(),
            notes: BTreeMap::new(),
            plans: BTreeMap::new(),
            preferences: None,
            daily_limit: 5,
            used_today: 0,
            fail_logout: false,
            fail_note_list: false,
            logout_calls: 0,
            reset_requests: Vec::new(),
            password_updates: Vec::new(),
            anon_key: "anon-key".to_string(),
            confirm_signups: false,
            wrap_pending_user: false,
            provider_logouts: 0,
            next_token: 1,
            next_note_id: 1,
            next_plan_id: 1,
        }
    }
}

impl FakeState {
    pub fn insert_note(&mut self, title: &str, content: &str) -> NoteId {
        let id = self.next_note_id;
        self.next_note_id += 1;
        let now = chrono::Utc::now().naive_utc();
        self.notes.insert(
            id,
            Note {
                id,
                title: title.to_string(),
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn insert_plan(&mut self, note_id: NoteId, content: &str, rating: u8) -> PlanId {
        let id = self.next_plan_id;
        self.next_plan_id += 1;
        self.plans.insert(
            id,
            TripPlan {
                id,
                note_id,
                plan_content: content.to_string(),
                rating,
                created_at: chrono::Utc::now().naive_utc(),
            },
        );
        id
    }

    /// Preferences with enough fields filled to pass the generation check.
    pub fn complete_preferences(&mut self) {
        self.preferences = Some(UserPreferences {
            budget: Some("MODERATE".into()),
            pace: Some("RELAXED".into()),
            interests: vec!["CULTURE".into(), "GASTRONOMY".into()],
            ..Default::default()
        });
    }

    fn issue_session(&mut self, email: &str) -> Value {
        let token = format!("mock-token-{}", self.next_token);
        self.next_token += 1;
        self.sessions.insert(token.clone(), email.to_string());

        let user = json!({ "id": format!("user-{email}"), "email": email, "role": "authenticated" });
        json!({
            "access_token": token,
            "user": user,
            "session": { "access_token": token, "user": user },
        })
    }

    fn provider_user(email: &str) -> Value {
        json!({ "id": format!("user-{email}"), "email": email, "aud": "authenticated", "role": "authenticated" })
    }

    fn issue_grant(&mut self, email: &str) -> Value {
        let token = format!("provider-token-{}", self.next_token);
        self.next_token += 1;
        self.sessions.insert(token.clone(), email.to_string());
        json!({
            "access_token": token,
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": format!("refresh-{token}"),
            "user": Self::provider_user(email),
        })
    }

    fn has_minimum_preferences(&self) -> bool {
        self.preferences
            .as_ref()
            .is_some_and(|p| p.filled_fields() >= MIN_FILLED_PREFERENCES)
    }

    fn remaining_usage(&self) -> u32 {
        self.daily_limit.saturating_sub(self.used_today)
    }
}

type Shared = Arc<Mutex<FakeState>>;

fn lock(state: &Shared) -> MutexGuard<'_, FakeState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// A running fake backend.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    base_url: String,
    state: Shared,
}

impl FakeBackend {
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(FakeState::default()).await
    }

    pub async fn spawn_with(state: FakeState) -> std::io::Result<Self> {
        let state = Arc::new(Mutex::new(state));
        let app = router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("fake backend stopped: {}", e);
            }
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        lock(&self.state)
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/mock-auth/login", post(login))
        .route("/api/mock-auth/register", post(register))
        .route("/api/mock-auth/logout", post(logout))
        .route("/auth/v1/token", post(provider_token))
        .route("/auth/v1/signup", post(provider_signup))
        .route("/auth/v1/logout", post(provider_logout))
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/api/trip-plans", get(list_plans))
        .route("/api/trip-plans/can-generate", get(can_generate))
        .route("/api/trip-plans/generate", post(generate_plan))
        .route("/api/trip-plans/{id}/rate", put(rate_plan))
        .route("/api/preferences", get(get_preferences).post(save_preferences))
        .route("/api/preferences/options", get(preference_options))
        .route("/api/auth/reset-password-request", post(reset_password_request))
        .route("/api/auth/update-password", post(update_password))
        .with_state(state)
}

// ---- helpers ----

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn failure(status: StatusCode, message: &str) -> Response {
    reply(status, json!({ "success": false, "message": message }))
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authorize(state: &FakeState, headers: &HeaderMap) -> Result<(), Response> {
    match bearer(headers) {
        Some(token) if state.sessions.contains_key(token) => Ok(()),
        _ => Err(reply(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "Not authenticated" }),
        )),
    }
}

fn options(pairs: &[(&str, &str)]) -> Vec<PreferenceOption> {
    pairs
        .iter()
        .map(|(value, label)| PreferenceOption::new(*value, *label))
        .collect()
}

/// The option catalogue the real backend serves.
pub fn option_catalogue() -> PreferenceOptionSet {
    PreferenceOptionSet {
        budget: options(&[("BUDGET", "Budget"), ("MODERATE", "Moderate"), ("LUXURY", "Luxury")]),
        pace: options(&[("RELAXED", "Relaxed"), ("MODERATE", "Moderate"), ("FAST_PACED", "Fast-paced")]),
        interests: options(&[
            ("CULTURE", "Culture"),
            ("NATURE", "Nature"),
            ("SPORTS", "Sports"),
            ("GASTRONOMY", "Gastronomy"),
            ("ADVENTURE", "Adventure"),
            ("RELAXATION", "Relaxation"),
            ("HISTORY", "History"),
            ("NIGHTLIFE", "Nightlife"),
        ]),
        accommodation_style: options(&[
            ("HOTEL", "Hotel"),
            ("HOSTEL", "Hostel"),
            ("APARTMENT", "Apartment"),
            ("CAMPING", "Camping"),
            ("BED_AND_BREAKFAST", "Bed & Breakfast"),
            ("RESORT", "Resort"),
        ]),
        transport: options(&[
            ("CAR", "Car"),
            ("TRAIN", "Train"),
            ("PLANE", "Plane"),
            ("BUS", "Bus"),
            ("BIKE", "Bike"),
            ("WALKING", "Walking"),
        ]),
        food_preferences: options(&[
            ("LOCAL_CUISINE", "Local Cuisine"),
            ("INTERNATIONAL", "International"),
            ("FAST_FOOD", "Fast Food"),
            ("VEGETARIAN", "Vegetarian"),
            ("VEGAN", "Vegan"),
            ("STREET_FOOD", "Street Food"),
            ("FINE_DINING", "Fine Dining"),
        ]),
        season: options(&[
            ("SPRING", "Spring"),
            ("SUMMER", "Summer"),
            ("AUTUMN", "Autumn"),
            ("WINTER", "Winter"),
            ("ANY", "Any Season"),
        ]),
    }
}

// ---- mock auth ----

#[derive(Deserialize)]
struct CredentialsBody {
    email: String,
    password: String,
}

async fn login(State(state): State<Shared>, Json(body): Json<CredentialsBody>) -> Response {
    let mut state = lock(&state);
    if state.users.get(&body.email) != Some(&body.password) {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "error": "Invalid credentials", "message": "Email or password is incorrect" }),
        );
    }
    let session = state.issue_session(&body.email);
    reply(StatusCode::OK, session)
}

async fn register(State(state): State<Shared>, Json(body): Json<CredentialsBody>) -> Response {
    let mut state = lock(&state);
    if state.users.contains_key(&body.email) {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "error": "User already exists", "message": "A user with this email already exists" }),
        );
    }
    state.users.insert(body.email.clone(), body.password);
    let session = state.issue_session(&body.email);
    reply(StatusCode::OK, session)
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = lock(&state);
    state.logout_calls += 1;
    if state.fail_logout {
        return reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": "Logout failed" }),
        );
    }
    if let Some(token) = bearer(&headers) {
        state.sessions.remove(token);
    }
    reply(StatusCode::OK, json!({ "message": "Logged out successfully" }))
}

// ---- identity provider ----

fn check_api_key(state: &FakeState, headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("apikey").and_then(|v| v.to_str().ok()) {
        Some(key) if key == state.anon_key => Ok(()),
        _ => Err(reply(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "No API key found in request" }),
        )),
    }
}

#[derive(Deserialize)]
struct GrantQuery {
    grant_type: String,
}

async fn provider_token(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<GrantQuery>,
    Json(body): Json<CredentialsBody>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = check_api_key(&state, &headers) {
        return denied;
    }
    if query.grant_type != "password" {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "error": "unsupported_grant_type", "error_description": "Unsupported grant type" }),
        );
    }
    if state.users.get(&body.email) != Some(&body.password) {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" }),
        );
    }
    let grant = state.issue_grant(&body.email);
    reply(StatusCode::OK, grant)
}

async fn provider_signup(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<CredentialsBody>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = check_api_key(&state, &headers) {
        return denied;
    }
    if state.users.contains_key(&body.email) {
        return reply(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "code": 422, "msg": "User already registered" }),
        );
    }
    state.users.insert(body.email.clone(), body.password);
    if !state.confirm_signups {
        let grant = state.issue_grant(&body.email);
        return reply(StatusCode::OK, grant);
    }
    let user = FakeState::provider_user(&body.email);
    if state.wrap_pending_user {
        reply(StatusCode::OK, json!({ "user": user, "session": null }))
    } else {
        reply(StatusCode::OK, user)
    }
}

async fn provider_logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = check_api_key(&state, &headers) {
        return denied;
    }
    state.provider_logouts += 1;
    if let Some(token) = bearer(&headers) {
        state.sessions.remove(token);
    }
    StatusCode::NO_CONTENT.into_response()
}

// ---- notes ----

async fn list_notes(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if state.fail_note_list {
        return reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": "db down" }),
        );
    }
    let notes: Vec<&Note> = state.notes.values().collect();
    reply(StatusCode::OK, json!(notes))
}

async fn get_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<NoteId>,
) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    match state.notes.get(&id) {
        Some(note) => reply(StatusCode::OK, json!(note)),
        None => failure(StatusCode::NOT_FOUND, "Note not found"),
    }
}

#[derive(Deserialize)]
struct NoteBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

fn validate_note(body: &NoteBody) -> Result<(), Response> {
    if body.title.trim().is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, "Title is required"));
    }
    if body.content.trim().is_empty() {
        return Err(failure(StatusCode::BAD_REQUEST, "Content is required"));
    }
    Ok(())
}

async fn create_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<NoteBody>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if let Err(invalid) = validate_note(&body) {
        return invalid;
    }
    let id = state.insert_note(&body.title, &body.content);
    reply(
        StatusCode::CREATED,
        json!({ "success": true, "message": "Note created successfully", "note": state.notes.get(&id) }),
    )
}

async fn update_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<NoteId>,
    Json(body): Json<NoteBody>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if let Err(invalid) = validate_note(&body) {
        return invalid;
    }
    let Some(note) = state.notes.get_mut(&id) else {
        return failure(StatusCode::NOT_FOUND, "Note not found");
    };
    note.title = body.title;
    note.content = body.content;
    note.updated_at = chrono::Utc::now().naive_utc();
    let note = note.clone();
    reply(
        StatusCode::OK,
        json!({ "success": true, "message": "Note updated successfully", "note": note }),
    )
}

async fn delete_note(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<NoteId>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if state.notes.remove(&id).is_none() {
        return failure(StatusCode::NOT_FOUND, "Note not found");
    }
    state.plans.retain(|_, plan| plan.note_id != id);
    reply(
        StatusCode::OK,
        json!({ "success": true, "message": "Note deleted successfully" }),
    )
}

// ---- trip plans ----

#[derive(Deserialize)]
struct NoteQuery {
    #[serde(rename = "noteId")]
    note_id: NoteId,
}

async fn list_plans(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<NoteQuery>,
) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if !state.notes.contains_key(&query.note_id) {
        return reply(StatusCode::NOT_FOUND, json!({ "message": "Note not found" }));
    }
    let plans: Vec<&TripPlan> = state
        .plans
        .values()
        .filter(|plan| plan.note_id == query.note_id)
        .collect();
    reply(StatusCode::OK, json!(plans))
}

async fn can_generate(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<NoteQuery>,
) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    if !state.notes.contains_key(&query.note_id) {
        return reply(
            StatusCode::OK,
            json!({ "can_generate": false, "reason": "Note not found" }),
        );
    }
    if !state.has_minimum_preferences() {
        return reply(
            StatusCode::OK,
            json!({
                "can_generate": false,
                "reason": "You need to fill at least 3 travel preferences to generate a plan",
                "missing_preferences": true,
            }),
        );
    }
    if state.remaining_usage() == 0 {
        return reply(
            StatusCode::OK,
            json!({
                "can_generate": false,
                "reason": format!("Daily AI usage limit exceeded ({} plans per day)", state.daily_limit),
                "limit_exceeded": true,
                "daily_limit": state.daily_limit,
            }),
        );
    }
    reply(
        StatusCode::OK,
        json!({
            "can_generate": true,
            "remaining_usage": state.remaining_usage(),
            "daily_limit": state.daily_limit,
        }),
    )
}

#[derive(Deserialize)]
struct GenerateBody {
    #[serde(rename = "noteId")]
    note_id: NoteId,
}

async fn generate_plan(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<GenerateBody>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let Some(note) = state.notes.get(&body.note_id).cloned() else {
        return failure(StatusCode::NOT_FOUND, "Note not found");
    };
    if !state.has_minimum_preferences() {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({
                "success": false,
                "message": "You need to fill at least 3 travel preferences to generate a plan",
                "missing_preferences": true,
            }),
        );
    }
    if state.remaining_usage() == 0 {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({
                "success": false,
                "message": format!("Daily AI usage limit exceeded ({} plans per day)", state.daily_limit),
                "limit_exceeded": true,
                "daily_limit": state.daily_limit,
            }),
        );
    }

    let content = format!("Day 1: Arrive and explore.\nDay 2: {}", note.title);
    let id = state.insert_plan(note.id, &content, 0);
    state.used_today += 1;
    reply(
        StatusCode::CREATED,
        json!({
            "success": true,
            "message": "Trip plan generated successfully",
            "trip_plan": state.plans.get(&id),
            "remaining_usage": state.remaining_usage(),
        }),
    )
}

#[derive(Deserialize)]
struct RateBody {
    rating: i64,
}

async fn rate_plan(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<PlanId>,
    Json(body): Json<RateBody>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    let rating = match u8::try_from(body.rating) {
        Ok(r) if (1..=5).contains(&r) => r,
        _ => return failure(StatusCode::BAD_REQUEST, "Rating must be between 1 and 5"),
    };
    let Some(plan) = state.plans.get_mut(&id) else {
        return failure(StatusCode::NOT_FOUND, "Trip plan not found");
    };
    plan.rating = rating;
    let plan = plan.clone();
    reply(
        StatusCode::OK,
        json!({ "success": true, "message": "Trip plan rated successfully", "trip_plan": plan }),
    )
}

// ---- preferences ----

async fn get_preferences(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    match &state.preferences {
        Some(preferences) => reply(StatusCode::OK, json!(preferences)),
        None => reply(
            StatusCode::NOT_FOUND,
            json!({ "message": "Preferences not found" }),
        ),
    }
}

async fn save_preferences(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<UserPreferences>,
) -> Response {
    let mut state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    state.preferences = Some(body);
    reply(
        StatusCode::OK,
        json!({ "success": true, "message": "Preferences saved successfully" }),
    )
}

async fn preference_options(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let state = lock(&state);
    if let Err(denied) = authorize(&state, &headers) {
        return denied;
    }
    reply(StatusCode::OK, json!(option_catalogue()))
}

// ---- password ----

#[derive(Deserialize)]
struct ResetRequestBody {
    #[serde(default)]
    email: String,
}

async fn reset_password_request(
    State(state): State<Shared>,
    Json(body): Json<ResetRequestBody>,
) -> Response {
    let mut state = lock(&state);
    if body.email.trim().is_empty() {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "message": "Email is required" }),
        );
    }
    state.reset_requests.push(body.email);
    reply(
        StatusCode::OK,
        json!({ "message": "Password reset email sent" }),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordBody {
    access_token: String,
    new_password: String,
}

async fn update_password(
    State(state): State<Shared>,
    Json(body): Json<UpdatePasswordBody>,
) -> Response {
    let mut state = lock(&state);
    if body.new_password.len() < 6 {
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "message": "Password must be at least 6 characters" }),
        );
    }
    state
        .password_updates
        .push((body.access_token, body.new_password));
    reply(
        StatusCode::OK,
        json!({ "message": "Password updated successfully" }),
    )
}
