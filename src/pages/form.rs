use dioxus::prelude::*;
use martian_dmv_core::{FormState, Step};

use crate::components::{AlienForm, StepFrame};

/// Step 2: Information Submission.
#[component]
pub fn Form(step: Signal<Step>) -> Element {
    let form = use_signal(FormState::new);

    rsx! {
        StepFrame { step, here: Step::Form,
            AlienForm { form }
        }
    }
}
