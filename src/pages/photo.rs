use dioxus::prelude::*;
use martian_dmv_core::photo;
use martian_dmv_core::Step;

use crate::components::{PhotoBooth, StepFrame};

/// Step 1: Identification.
#[component]
pub fn Photo(step: Signal<Step>) -> Element {
    let booth = use_signal(photo::PhotoBooth::new);

    rsx! {
        StepFrame { step, here: Step::Photo,
            PhotoBooth { booth }
        }
    }
}
