//! # Domain models for notes, trip plans and travel preferences
//!
//! These are the shapes the backend sends and accepts. Field names follow the
//! backend's camelCase JSON; timestamps are the backend's zone-less local date-times.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Note`] | A travel note: title, free-form content, created/updated stamps. |
//! | [`NoteDraft`] | Request body for creating or editing a note. |
//! | [`TripPlan`] | A generated itinerary for a note. `rating` is `0` until rated. |
//! | [`Rating`] | A committed star rating, always within `1..=5`. |
//! | [`PreferenceOptionSet`] | Every selectable `{value,label}` per preference field. |
//! | [`UserPreferences`] | The user's saved choices: one value per single-choice field, a subset per multi-choice field. |

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

pub type NoteId = i64;
pub type PlanId = i64;

/// A travel note owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// A generated trip plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub id: PlanId,
    pub note_id: NoteId,
    pub plan_content: String,
    /// 0 means unrated; the backend sends `null` for that.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rating: u8,
    pub created_at: NaiveDateTime,
}

impl TripPlan {
    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(Option::<u8>::deserialize(deserializer)?.unwrap_or(0))
}

/// A star rating in `1..=5`. There is no way to build one outside that range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every rating, lowest first. One per star control.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

/// One selectable preference value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceOption {
    pub value: String,
    pub label: String,
}

impl PreferenceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Response of `GET /api/preferences/options`. Read-only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceOptionSet {
    pub budget: Vec<PreferenceOption>,
    pub pace: Vec<PreferenceOption>,
    pub interests: Vec<PreferenceOption>,
    pub accommodation_style: Vec<PreferenceOption>,
    pub transport: Vec<PreferenceOption>,
    pub food_preferences: Vec<PreferenceOption>,
    pub season: Vec<PreferenceOption>,
}

/// The user's travel preferences. Unset single-choice fields serialise as `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub budget: Option<String>,
    pub pace: Option<String>,
    pub interests: Vec<String>,
    pub accommodation_style: Option<String>,
    pub transport: Vec<String>,
    pub food_preferences: Vec<String>,
    pub season: Option<String>,
}

impl UserPreferences {
    /// Number of fields holding at least one value.
    pub fn filled_fields(&self) -> usize {
        [
            self.budget.is_some(),
            self.pace.is_some(),
            !self.interests.is_empty(),
            self.accommodation_style.is_some(),
            !self.transport.is_empty(),
            !self.food_preferences.is_empty(),
            self.season.is_some(),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_parses_backend_timestamps() {
        let json = r#"{
            "id": 7,
            "title": "Lisbon",
            "content": "Trams and tiles",
            "createdAt": "2024-05-01T09:30:00",
            "updatedAt": "2024-05-02T18:00:00.123456"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.created_at.to_string(), "2024-05-01 09:30:00");
    }

    #[test]
    fn test_trip_plan_null_rating_is_unrated() {
        let json = r#"{"id":1,"noteId":2,"planContent":"Day 1","rating":null,"createdAt":"2024-05-01T09:30:00"}"#;
        let plan: TripPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.rating, 0);
        assert!(!plan.is_rated());

        let missing = r#"{"id":1,"noteId":2,"planContent":"Day 1","createdAt":"2024-05-01T09:30:00"}"#;
        let plan: TripPlan = serde_json::from_str(missing).unwrap();
        assert_eq!(plan.rating, 0);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(3).map(Rating::get), Some(3));
        assert_eq!(Rating::all().map(Rating::get).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(serde_json::to_string(&Rating::new(4).unwrap()).unwrap(), "4");
    }

    #[test]
    fn test_preferences_serialise_empty_singles_as_null() {
        let prefs = UserPreferences {
            budget: Some("LUXURY".into()),
            interests: vec!["CULTURE".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(value["budget"], "LUXURY");
        assert!(value["pace"].is_null());
        assert_eq!(value["foodPreferences"], serde_json::json!([]));
        assert_eq!(prefs.filled_fields(), 2);
    }

    #[test]
    fn test_option_set_tolerates_missing_fields() {
        let set: PreferenceOptionSet =
            serde_json::from_str(r#"{"budget":[{"value":"BUDGET","label":"Budget"}]}"#).unwrap();
        assert_eq!(set.budget.len(), 1);
        assert!(set.season.is_empty());
    }
}
