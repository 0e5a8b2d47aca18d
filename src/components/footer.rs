use dioxus::prelude::*;

const NOTICE: &str = "⚠️ NOTICE: Teleportation devices must be checked at security. \
Time dilation penalties apply for late arrivals. Humans need additional form 27B-6. \
The DMV Director is currently on holiday in the Andromeda galaxy and will return in 2.7 million years. \
Temporal exemptions not valid on Tuesdays. Please do not feed the quantum anomalies. \
Translator devices must be certified for diplomatic language. \
Penalties for incorrect forms include possible redistribution of limbs. \
Have a bureaucratically efficient day! ⚠️";

#[component]
pub fn PageFooter() -> Element {
    rsx! {
        footer { class: "page-footer",
            p { "Martian DMV © 4023 | Standard Galactic Year 2077 | Sector 9, Mars Colony" }
            p {
                "This is a work of satirical fiction. Any resemblance to actual bureaucratic "
                "nightmares is purely coincidental and hilarious."
            }
        }
    }
}

/// Scrolling notice pinned to the bottom of the window.
#[component]
pub fn Marquee() -> Element {
    rsx! {
        div { class: "marquee",
            div { class: "marquee-track",
                span { "{NOTICE}" }
                span { class: "marquee-gap" }
                span { "{NOTICE}" }
            }
        }
    }
}
