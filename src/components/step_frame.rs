use dioxus::prelude::*;
use martian_dmv_core::Step;
use martian_dmv_ui::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct StepFrameProps {
    pub step: Signal<Step>,
    /// The step this frame renders
    pub here: Step,
    /// The step's widget
    pub children: Element,
}

/// Title, subtitle, widget, then the back/forward buttons.
#[component]
pub fn StepFrame(props: StepFrameProps) -> Element {
    let mut step = props.step;
    let here = props.here;

    rsx! {
        section { class: "step-frame",
            h2 { class: "step-title", "{here.title()}" }
            p { class: "step-subtitle", "{here.subtitle()}" }
            {props.children}
            div { class: "button-row",
                if let (Some(target), Some(label)) = (here.back(), here.back_label()) {
                    Button {
                        variant: ButtonVariant::Alien,
                        onclick: move |_| step.set(target),
                        "{label}"
                    }
                }
                Button {
                    variant: ButtonVariant::Mars,
                    onclick: move |_| step.set(here.forward()),
                    "{here.forward_label()}"
                }
            }
        }
    }
}
