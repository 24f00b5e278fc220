use dioxus::prelude::*;

use crate::state::{MultiChoice, PreferencesForm, SingleChoice};

/// Selects for single-choice fields, checkbox groups for multi-choice ones.
#[component]
pub fn PreferencesFormView(
    form: PreferencesForm,
    #[props(default)] saving: bool,
    on_change: EventHandler<PreferencesForm>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "preferences-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            for field in SingleChoice::ALL {
                div {
                    key: "{field.key()}",
                    class: "form-field",
                    label { r#for: field.key(), "{field.label()}" }
                    select {
                        id: field.key(),
                        value: form.single(field),
                        onchange: {
                            let form = form.clone();
                            move |evt: FormEvent| {
                                let mut next = form.clone();
                                next.set_single(field, &evt.value());
                                on_change.call(next);
                            }
                        },
                        option { value: "", "-- Select --" }
                        for opt in field.options(&form.options) {
                            option {
                                key: "{opt.value}",
                                value: "{opt.value}",
                                selected: form.single(field) == opt.value,
                                "{opt.label}"
                            }
                        }
                    }
                }
            }
            for field in MultiChoice::ALL {
                div {
                    key: "{field.key()}",
                    class: "form-field",
                    label { "{field.label()}" }
                    div {
                        class: "checkbox-group",
                        for opt in field.options(&form.options) {
                            div {
                                key: "{opt.value}",
                                class: "checkbox-item",
                                input {
                                    r#type: "checkbox",
                                    id: "{field.key()}-{opt.value}",
                                    name: field.key(),
                                    value: "{opt.value}",
                                    checked: form.is_checked(field, &opt.value),
                                    onchange: {
                                        let form = form.clone();
                                        let value = opt.value.clone();
                                        move |evt: FormEvent| {
                                            let mut next = form.clone();
                                            next.toggle(field, &value, evt.checked());
                                            on_change.call(next);
                                        }
                                    },
                                }
                                label { r#for: "{field.key()}-{opt.value}", "{opt.label}" }
                            }
                        }
                    }
                }
            }
            button {
                class: "primary",
                r#type: "submit",
                disabled: saving,
                if saving { "Saving..." } else { "Save Preferences" }
            }
        }
    }
}
