//! Intro page - the main desk.

use dioxus::prelude::*;
use martian_dmv_core::Step;
use martian_dmv_ui::{Button, ButtonVariant};

use crate::context::settings;

/// Welcome screen with the pending request number.
#[component]
pub fn Intro(mut step: Signal<Step>, request_number: usize) -> Element {
    let here = Step::Intro;
    let wait = settings().ticket_wait.clone();

    rsx! {
        section { class: "intro",
            div { class: "glitch-text intro-title", "{here.title()}" }
            h2 { class: "intro-subtitle", "{here.subtitle()}" }
            p { class: "intro-body",
                "Welcome to the Martian Department of Migration Verification (DMV). "
                "Your license renewal request #{request_number}-X9 has been pending for {wait}. "
                "Please follow the protocol to expedite your application."
            }

            div { class: "holographic system-notice",
                p { class: "notice-heading", "SYSTEM NOTICE:" }
                p { "⚠️ WARNING: Recent reports indicate increased bureaucracy levels of 287%." }
                p {
                    "⚠️ All entities requiring expedited processing must participate in all "
                    "verification steps or face IMMEDIATE deportation to the Terrestrial Origin "
                    "Processing Center (Earth)."
                }
            }

            div { class: "button-row",
                Button {
                    variant: ButtonVariant::Mars,
                    onclick: move |_| step.set(here.forward()),
                    "{here.forward_label()}"
                }
                Button {
                    variant: ButtonVariant::Alien,
                    onclick: move |_| step.set(here.skip_the_line()),
                    "Skip the Line"
                }
            }
        }
    }
}
