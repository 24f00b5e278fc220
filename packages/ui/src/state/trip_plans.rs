//! View-model for a note's trip plans, the star rating and the generation gate.

use api::CanGenerate;
use store::{PlanId, Rating, TripPlan};

/// One star control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    pub rating: Rating,
    /// Within the committed rating.
    pub filled: bool,
    /// Within the rating under the pointer.
    pub hovered: bool,
}

/// Plans for the note on screen, plus the star under the pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripPlansState {
    pub plans: Vec<TripPlan>,
    pub loaded: bool,
    pub error: Option<String>,
    hover: Option<(PlanId, Rating)>,
}

impl TripPlansState {
    pub fn replace(&mut self, plans: Vec<TripPlan>) {
        self.plans = plans;
        self.loaded = true;
        self.error = None;
        self.hover = None;
    }

    pub fn fail(&mut self) {
        self.loaded = true;
        self.error = Some("Failed to load trip plans.".to_string());
    }

    /// Commit a rating the server accepted. Only the matching plan changes.
    pub fn apply_rating(&mut self, plan_id: PlanId, rating: Rating) -> bool {
        match self.plans.iter_mut().find(|plan| plan.id == plan_id) {
            Some(plan) => {
                plan.rating = rating.get();
                true
            }
            None => false,
        }
    }

    pub fn hover(&mut self, plan_id: PlanId, rating: Rating) {
        self.hover = Some((plan_id, rating));
    }

    pub fn unhover(&mut self, plan_id: PlanId) {
        if matches!(self.hover, Some((id, _)) if id == plan_id) {
            self.hover = None;
        }
    }

    pub fn stars(&self, plan: &TripPlan) -> Vec<Star> {
        let hovered = match self.hover {
            Some((id, rating)) if id == plan.id => rating.get(),
            _ => 0,
        };
        Rating::all()
            .map(|rating| Star {
                rating,
                filled: rating.get() <= plan.rating,
                hovered: rating.get() <= hovered,
            })
            .collect()
    }
}

/// What the server said about generating another plan for this note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationGate {
    #[default]
    Checking,
    Allowed { remaining: u32, daily_limit: u32 },
    MissingPreferences { reason: String },
    LimitExceeded { reason: String },
    /// Refused for a reason the client has no special handling for.
    Blocked { reason: String },
}

impl From<CanGenerate> for GenerationGate {
    fn from(check: CanGenerate) -> Self {
        let reason = check.reason.unwrap_or_default();
        if check.can_generate {
            GenerationGate::Allowed {
                remaining: check.remaining_usage.unwrap_or(0),
                daily_limit: check.daily_limit.unwrap_or(0),
            }
        } else if check.missing_preferences {
            GenerationGate::MissingPreferences { reason }
        } else if check.limit_exceeded {
            GenerationGate::LimitExceeded { reason }
        } else if reason.trim().is_empty() {
            GenerationGate::Blocked {
                reason: "Cannot generate plan at this time.".to_string(),
            }
        } else {
            GenerationGate::Blocked { reason }
        }
    }
}

impl GenerationGate {
    pub fn can_generate(&self) -> bool {
        matches!(self, GenerationGate::Allowed { .. })
    }

    /// Informational line for the allowed state.
    pub fn info(&self) -> Option<String> {
        match self {
            GenerationGate::Allowed {
                remaining,
                daily_limit,
            } => Some(format!(
                "You can generate {remaining} more plan(s) today (limit: {daily_limit} per day)."
            )),
            _ => None,
        }
    }

    /// Warning line for every refusing state.
    pub fn warning(&self) -> Option<String> {
        match self {
            GenerationGate::MissingPreferences { reason } => Some(format!(
                "{reason}. Go to Profile to set your travel preferences."
            )),
            GenerationGate::LimitExceeded { reason } => {
                Some(format!("{reason}. Please try again tomorrow."))
            }
            GenerationGate::Blocked { reason } => Some(reason.clone()),
            GenerationGate::Checking | GenerationGate::Allowed { .. } => None,
        }
    }

    pub fn needs_preferences(&self) -> bool {
        matches!(self, GenerationGate::MissingPreferences { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn plan(id: PlanId, rating: u8) -> TripPlan {
        TripPlan {
            id,
            note_id: 1,
            plan_content: format!("plan {id}"),
            rating,
            created_at: NaiveDateTime::parse_from_str("2024-05-01 09:30:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
        }
    }

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn test_rating_touches_only_target_plan() {
        let mut state = TripPlansState::default();
        state.replace(vec![plan(1, 0), plan(2, 3), plan(3, 5)]);

        assert!(state.apply_rating(2, rating(5)));
        let ratings: Vec<u8> = state.plans.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![0, 5, 5]);

        assert!(!state.apply_rating(42, rating(1)));
        let ratings: Vec<u8> = state.plans.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![0, 5, 5]);
    }

    #[test]
    fn test_stars_fill_and_preview() {
        let mut state = TripPlansState::default();
        state.replace(vec![plan(1, 2), plan(2, 0)]);
        let first = state.plans[0].clone();
        let second = state.plans[1].clone();

        let stars = state.stars(&first);
        assert_eq!(stars.len(), 5);
        assert_eq!(stars.iter().filter(|s| s.filled).count(), 2);
        assert!(stars.iter().all(|s| !s.hovered));

        state.hover(1, rating(4));
        assert_eq!(state.stars(&first).iter().filter(|s| s.hovered).count(), 4);
        assert_eq!(state.stars(&first).iter().filter(|s| s.filled).count(), 2);
        assert!(state.stars(&second).iter().all(|s| !s.hovered));

        state.unhover(2);
        assert_eq!(state.stars(&first).iter().filter(|s| s.hovered).count(), 4);
        state.unhover(1);
        assert!(state.stars(&first).iter().all(|s| !s.hovered));
    }

    #[test]
    fn test_missing_preferences_wins_over_limit() {
        let gate = GenerationGate::from(CanGenerate {
            can_generate: false,
            reason: Some("You need to fill at least 3 travel preferences to generate a plan".into()),
            missing_preferences: true,
            limit_exceeded: true,
            ..Default::default()
        });
        assert!(gate.needs_preferences());
        assert!(!gate.can_generate());
        assert!(gate.info().is_none());
        assert_eq!(
            gate.warning().as_deref(),
            Some("You need to fill at least 3 travel preferences to generate a plan. Go to Profile to set your travel preferences.")
        );
    }

    #[test]
    fn test_gate_states() {
        let allowed = GenerationGate::from(CanGenerate {
            can_generate: true,
            remaining_usage: Some(2),
            daily_limit: Some(5),
            ..Default::default()
        });
        assert!(allowed.can_generate());
        assert_eq!(
            allowed.info().as_deref(),
            Some("You can generate 2 more plan(s) today (limit: 5 per day).")
        );
        assert!(allowed.warning().is_none());

        let limited = GenerationGate::from(CanGenerate {
            limit_exceeded: true,
            reason: Some("Daily AI usage limit exceeded (5 plans per day)".into()),
            ..Default::default()
        });
        assert!(!limited.can_generate());
        assert_eq!(
            limited.warning().as_deref(),
            Some("Daily AI usage limit exceeded (5 plans per day). Please try again tomorrow.")
        );

        let blocked = GenerationGate::from(CanGenerate::default());
        assert_eq!(
            blocked,
            GenerationGate::Blocked {
                reason: "Cannot generate plan at this time.".into()
            }
        );
        assert!(!GenerationGate::Checking.can_generate());
    }
}
