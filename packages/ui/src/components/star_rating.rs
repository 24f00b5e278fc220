use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;
use store::Rating;

use crate::state::Star;

/// Five clickable stars. Hovering previews, clicking commits through `on_rate`.
#[component]
pub fn StarRating(
    stars: Vec<Star>,
    rating: u8,
    on_rate: EventHandler<Rating>,
    on_hover: EventHandler<Rating>,
    on_leave: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "plan-rating",
            label { "Rate this plan:" }
            div {
                class: "star-rating",
                onmouseleave: move |_| on_leave.call(()),
                for star in stars {
                    span {
                        key: "{star.rating.get()}",
                        class: if star.filled { "star filled" } else { "star" },
                        class: if star.hovered { "hover" },
                        title: "{star.rating.get()}/5",
                        onclick: move |_| on_rate.call(star.rating),
                        onmouseenter: move |_| on_hover.call(star.rating),
                        Icon { width: 18, height: 18, fill: "currentColor", icon: FaStar }
                    }
                }
            }
            if rating > 0 {
                span { class: "rating-value", "({rating}/5)" }
            }
        }
    }
}
