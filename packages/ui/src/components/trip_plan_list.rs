use dioxus::prelude::*;
use store::{PlanId, Rating};

use super::StarRating;
use crate::state::{format_datetime, TripPlansState};

/// Every plan generated for one note, each with its own star control.
#[component]
pub fn TripPlanList(
    state: TripPlansState,
    on_rate: EventHandler<(PlanId, Rating)>,
    on_hover: EventHandler<(PlanId, Rating)>,
    on_leave: EventHandler<PlanId>,
) -> Element {
    if let Some(error) = &state.error {
        return rsx! {
            div { class: "error", "{error}" }
        };
    }
    if state.plans.is_empty() {
        return rsx! {
            p {
                class: "empty-plans",
                "No trip plans generated yet. Click \"Generate Trip Plan\" to create one!"
            }
        };
    }

    rsx! {
        div {
            class: "trip-plans-list",
            for plan in state.plans.iter() {
                div {
                    key: "{plan.id}",
                    class: "trip-plan-item",
                    div {
                        class: "plan-header",
                        span { class: "plan-date", "Generated: {format_datetime(&plan.created_at)}" }
                    }
                    div { class: "plan-content", "{plan.plan_content}" }
                    StarRating {
                        stars: state.stars(plan),
                        rating: plan.rating,
                        on_rate: {
                            let id = plan.id;
                            move |rating: Rating| on_rate.call((id, rating))
                        },
                        on_hover: {
                            let id = plan.id;
                            move |rating: Rating| on_hover.call((id, rating))
                        },
                        on_leave: {
                            let id = plan.id;
                            move |_: ()| on_leave.call(id)
                        },
                    }
                }
            }
        }
    }
}
