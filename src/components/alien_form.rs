//! Intergalactic License Form
//!
//! Editing → Processing (spinner, fixed delay) → Submitted (queue ticket).
//! Validation messages come straight from [`FormError`]'s `Display`.
//!
//! [`FormError`]: martian_dmv_core::FormError

use dioxus::prelude::*;
use martian_dmv_core::form::{Atmosphere, MASS_MAX};
use martian_dmv_core::FormState;
use martian_dmv_ui::{Button, ButtonVariant, Checkbox, Input, RadioGroup, RadioOption, Slider, Spinner};

use crate::context::{settings, use_dice};
use crate::timers::after;

fn atmosphere_options() -> Vec<RadioOption> {
    Atmosphere::ALL
        .iter()
        .map(|a| RadioOption::new(a.key(), a.label()))
        .collect()
}

#[component]
pub fn AlienForm(form: Signal<FormState>) -> Element {
    let mut form = form;
    let mut dice = use_dice();

    let submit = move |_: ()| {
        if form.write().submit() {
            after(settings().form_processing_delay(), move || {
                form.write().complete(settings().queue_ticket());
            });
        }
    };

    if let Some(ticket) = form.read().ticket().cloned() {
        return rsx! {
            div { class: "holographic widget",
                h2 { class: "widget-title", "Form Processed" }
                div { class: "ticket",
                    p { class: "ticket-position",
                        "Your application has been placed in queue position: "
                        span { class: "ticket-number", "{ticket.position_display()}" }
                    }
                    p { class: "ticket-wait", "Estimated processing time: {ticket.estimated_wait}" }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {ticket.progress}%;" }
                    }
                    Button {
                        variant: ButtonVariant::Mars,
                        onclick: move |_| form.write().reset(),
                        "Start Over"
                    }
                }
            }
        };
    }

    let state = form.read().clone();
    let app = &state.application;

    rsx! {
        div { class: "holographic widget",
            h2 { class: "widget-title", "Intergalactic License Form" }

            if let Some(error) = &state.error {
                div { class: "error-banner", p { "{error}" } }
            }

            Input {
                id: "designation".to_string(),
                label: "Entity Designation (Name)".to_string(),
                placeholder: "Enter your designation".to_string(),
                value: app.designation.clone(),
                oninput: move |value: String| form.write().set_designation(value),
            }

            div { class: "form-field",
                label { class: "input-label", r#for: "origin", "Origin Star System" }
                div { class: "input-with-action",
                    input {
                        id: "origin",
                        class: "input-mars",
                        r#type: "text",
                        placeholder: "e.g. Zorgon-5",
                        value: "{app.origin}",
                        oninput: move |e| form.write().set_origin(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Alien,
                        title: "I can't remember my home planet".to_string(),
                        onclick: move |_| form.write().randomize_origin(&mut *dice.write()),
                        "Randomize"
                    }
                }
            }

            Slider {
                label: format!("Estimated Mass After Hyperjump: {} Zorblaxes", app.mass),
                value: app.mass,
                max: MASS_MAX,
                onchange: move |mass: u8| form.write().set_mass(mass),
                ticks: vec![
                    "Light (20)".to_string(),
                    "Average (50)".to_string(),
                    "Heavy (100)".to_string(),
                ],
            }

            RadioGroup {
                name: "atmosphere".to_string(),
                label: "Atmosphere Preference".to_string(),
                options: atmosphere_options(),
                selected: app.atmosphere.key().to_string(),
                onchange: move |key: String| {
                    if let Some(atmosphere) = Atmosphere::from_key(&key) {
                        form.write().set_atmosphere(atmosphere);
                    }
                },
            }

            div { class: "form-field",
                Checkbox {
                    id: "leaks-plasma".to_string(),
                    checked: app.leaks_plasma,
                    label: "I occasionally leak plasma under pressure".to_string(),
                    onchange: move |leaks: bool| form.write().set_leaks_plasma(leaks),
                }
                if app.leaks_plasma {
                    p { class: "plasma-note",
                        "Note: Plasma containment bags are required in all government facilities"
                    }
                }
            }

            Button {
                variant: ButtonVariant::Mars,
                class: "w-full",
                disabled: state.is_processing(),
                onclick: submit,
                if state.is_processing() {
                    Spinner { label: "Processing...".to_string() }
                } else {
                    "Submit for Review"
                }
            }
        }
    }
}
