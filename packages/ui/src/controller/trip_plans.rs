use api::AuthClient;
use store::{Note, NoteId, PlanId, Rating, TripPlan};

use super::Controller;
use crate::state::GenerationGate;
use crate::PageError;

/// Everything the detail page shows on load. Plans fail independently of the note.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub note: Note,
    pub plans: Result<Vec<TripPlan>, PageError>,
    pub gate: GenerationGate,
}

/// Result of a successful generation: the refetched plans and the re-checked gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub message: String,
    pub plans: Result<Vec<TripPlan>, PageError>,
    pub gate: GenerationGate,
}

impl<A: AuthClient> Controller<'_, A> {
    pub async fn load_detail(&self, note_id: NoteId) -> Result<DetailPage, PageError> {
        let token = self.token().await?;
        let note = self
            .api
            .get_note(&token, note_id)
            .await
            .inspect_err(|e| tracing::error!("Error loading note {}: {}", note_id, e))?;
        Ok(DetailPage {
            note,
            plans: self.load_trip_plans(note_id).await,
            gate: self.check_generation(note_id).await,
        })
    }

    pub async fn load_trip_plans(&self, note_id: NoteId) -> Result<Vec<TripPlan>, PageError> {
        let token = self.token().await?;
        self.api
            .list_trip_plans(&token, note_id)
            .await
            .inspect_err(|e| tracing::error!("Error loading trip plans: {}", e))
            .map_err(Into::into)
    }

    /// Ask the server whether another plan may be generated. Never fails; a check
    /// that could not be made leaves generation blocked with an explanation.
    pub async fn check_generation(&self, note_id: NoteId) -> GenerationGate {
        let token = match self.token().await {
            Ok(token) => token,
            Err(_) => {
                return GenerationGate::Blocked {
                    reason: "Please log in to generate trip plans.".to_string(),
                }
            }
        };
        match self.api.can_generate(&token, note_id).await {
            Ok(check) => check.into(),
            Err(e) => {
                tracing::error!("Error checking generation status: {}", e);
                GenerationGate::Blocked {
                    reason: "Failed to check if you can generate a plan. Please try again."
                        .to_string(),
                }
            }
        }
    }

    pub async fn generate_plan(&self, note_id: NoteId) -> Result<Generation, PageError> {
        let token = self.token().await?;
        let generated = self
            .api
            .generate_trip_plan(&token, note_id)
            .await
            .inspect_err(|e| tracing::error!("Error generating trip plan: {}", e))?;
        tracing::info!(
            "Generated trip plan for note {}, {:?} left today",
            note_id,
            generated.remaining_usage
        );

        Ok(Generation {
            message: "Trip plan generated successfully!".to_string(),
            plans: self.load_trip_plans(note_id).await,
            gate: self.check_generation(note_id).await,
        })
    }

    /// Commit a rating. On success the caller patches its list in place.
    pub async fn rate_plan(&self, plan_id: PlanId, rating: Rating) -> Result<Rating, PageError> {
        let token = self.token().await?;
        self.api
            .rate_trip_plan(&token, plan_id, rating)
            .await
            .inspect_err(|e| tracing::error!("Error rating trip plan: {}", e))?;
        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::Harness;
    use crate::state::TripPlansState;

    #[tokio::test]
    async fn test_detail_without_preferences_disables_generation() {
        let harness = Harness::signed_in().await;
        let note_id = harness.backend.state().insert_note("Kyoto", "Temples");

        let page = harness.controller().load_detail(note_id).await.unwrap();
        assert_eq!(page.note.title, "Kyoto");
        assert_eq!(page.plans, Ok(vec![]));
        assert!(page.gate.needs_preferences());
        assert!(!page.gate.can_generate());
        assert!(page.gate.warning().unwrap().contains("Go to Profile"));
        assert!(!page.gate.warning().unwrap().contains("try again tomorrow"));
    }

    #[tokio::test]
    async fn test_generate_refreshes_plans_and_quota() {
        let harness = Harness::signed_in().await;
        let note_id = {
            let mut state = harness.backend.state();
            state.complete_preferences();
            state.daily_limit = 2;
            state.insert_note("Kyoto", "Temples")
        };
        let controller = harness.controller();
        assert_eq!(
            controller.check_generation(note_id).await,
            GenerationGate::Allowed { remaining: 2, daily_limit: 2 }
        );

        let generation = controller.generate_plan(note_id).await.unwrap();
        assert_eq!(generation.plans.as_ref().map(Vec::len), Ok(1));
        assert_eq!(generation.gate, GenerationGate::Allowed { remaining: 1, daily_limit: 2 });

        let generation = controller.generate_plan(note_id).await.unwrap();
        assert_eq!(generation.plans.as_ref().map(Vec::len), Ok(2));
        assert!(matches!(generation.gate, GenerationGate::LimitExceeded { .. }));

        let err = controller.generate_plan(note_id).await.unwrap_err();
        assert_eq!(err.to_string(), "Daily AI usage limit exceeded (2 plans per day)");
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_gate_and_plans() {
        let harness = Harness::signed_in().await;
        let note_id = {
            let mut state = harness.backend.state();
            state.complete_preferences();
            let note_id = state.insert_note("Kyoto", "Temples");
            state.insert_plan(note_id, "Day 1: Gion", 4);
            note_id
        };
        let controller = harness.controller();
        let gate = controller.check_generation(note_id).await;
        assert!(gate.can_generate());

        harness.backend.state().preferences = None;
        let err = controller.generate_plan(note_id).await.unwrap_err();
        assert_eq!(
            err.for_action("Failed to generate trip plan"),
            "Failed to generate trip plan: You need to fill at least 3 travel preferences to generate a plan"
        );

        let state = harness.backend.state();
        assert_eq!(state.plans.len(), 1);
        assert_eq!(state.used_today, 0);
    }

    #[tokio::test]
    async fn test_rating_patches_single_plan() {
        let harness = Harness::signed_in().await;
        let note_id = {
            let mut state = harness.backend.state();
            let note_id = state.insert_note("Porto", "Wine");
            state.insert_plan(note_id, "Day 1", 0);
            state.insert_plan(note_id, "Day 2", 3);
            note_id
        };
        let controller = harness.controller();

        let mut plans = TripPlansState::default();
        plans.replace(controller.load_trip_plans(note_id).await.unwrap());

        let rating = controller.rate_plan(1, Rating::new(5).unwrap()).await.unwrap();
        assert!(plans.apply_rating(1, rating));
        assert_eq!(plans.plans.iter().map(|p| p.rating).collect::<Vec<_>>(), vec![5, 3]);

        let err = controller.rate_plan(99, Rating::new(2).unwrap()).await.unwrap_err();
        assert_eq!(err.to_string(), "Trip plan not found");
    }

    #[tokio::test]
    async fn test_gate_without_session() {
        let harness = Harness::anonymous().await;
        let gate = harness.controller().check_generation(1).await;
        assert_eq!(
            gate,
            GenerationGate::Blocked { reason: "Please log in to generate trip plans.".into() }
        );
        assert_eq!(
            harness.controller().load_detail(1).await,
            Err(PageError::AuthMissing)
        );
    }

    #[tokio::test]
    async fn test_missing_note() {
        let harness = Harness::signed_in().await;
        let err = harness.controller().load_detail(5).await.unwrap_err();
        assert_eq!(err.to_string(), "Note not found");
    }
}
