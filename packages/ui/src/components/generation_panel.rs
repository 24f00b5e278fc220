use dioxus::prelude::*;

use crate::state::GenerationGate;

/// The generate button and whatever the last gate check said.
#[component]
pub fn GenerationPanel(
    gate: GenerationGate,
    generating: bool,
    #[props(default = "/profile".to_string())] profile_path: String,
    on_generate: EventHandler<()>,
) -> Element {
    let disabled = generating || !gate.can_generate();

    rsx! {
        div {
            class: "generation-panel",
            if let Some(info) = gate.info() {
                div { class: "plan-info", "{info}" }
            }
            if let Some(warning) = gate.warning() {
                div {
                    class: "plan-warning",
                    "{warning}"
                    if gate.needs_preferences() {
                        " "
                        Link { to: profile_path.clone(), "Go to Profile" }
                    }
                }
            }
            button {
                class: "primary generate-btn",
                disabled,
                onclick: move |_| on_generate.call(()),
                "Generate Trip Plan"
            }
            if generating {
                div { class: "generating-status", "Generating your trip plan... This may take a moment." }
            }
        }
    }
}
