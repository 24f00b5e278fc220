//! Wire shapes of backend responses that are not domain models.

use serde::{Deserialize, Serialize};
use store::{Note, TripPlan};

/// Generic acknowledgement of a mutating call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of note create/update.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoteSaved {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub note: Option<Note>,
}

/// Response of `GET /api/trip-plans/can-generate`.
///
/// The flags are mutually exclusive in practice; `can_generate` wins when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanGenerate {
    pub can_generate: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub missing_preferences: bool,
    #[serde(default)]
    pub limit_exceeded: bool,
    #[serde(default)]
    pub remaining_usage: Option<u32>,
    #[serde(default)]
    pub daily_limit: Option<u32>,
}

/// Response of `POST /api/trip-plans/generate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Generated {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub trip_plan: Option<TripPlan>,
    #[serde(default)]
    pub remaining_usage: Option<u32>,
}

/// Response of `PUT /api/trip-plans/{id}/rate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rated {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub trip_plan: Option<TripPlan>,
}
