use dioxus::prelude::*;

/// Spinning ring with a status label, e.g. "Scanning Brainwaves..."
#[component]
pub fn Spinner(label: String) -> Element {
    rsx! {
        span { class: "spinner-row",
            svg {
                class: "spinner",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                circle {
                    class: "spinner-track",
                    cx: "12",
                    cy: "12",
                    r: "10",
                    stroke: "currentColor",
                    stroke_width: "4",
                }
                path {
                    class: "spinner-head",
                    fill: "currentColor",
                    d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z",
                }
            }
            "{label}"
        }
    }
}
