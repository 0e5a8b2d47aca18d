//! Navigation Header Component
//!
//! Left: "M-DMV" badge with a pulsing status dot
//! Right: one pill per step tab, the current step highlighted

use dioxus::prelude::*;
use martian_dmv_core::Step;
use martian_dmv_ui::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current step, set when a tab is clicked
    pub step: Signal<Step>,
}

/// Navigation Header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut step = props.step;
    let current = step();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-brand",
                div { class: "alien-text", "data-text": "M-DMV", "M-DMV" }
                div { class: "status-dot" }
            }
            nav {
                ul { class: "nav-tabs",
                    for tab in Step::TABS {
                        li { key: "{tab.tab_label()}",
                            Button {
                                variant: ButtonVariant::Tab,
                                active: tab == current,
                                onclick: move |_| step.set(tab),
                                "{tab.tab_label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
