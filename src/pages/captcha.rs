use dioxus::prelude::*;
use martian_dmv_core::{CaptchaBoard, Step};

use crate::components::{AlienCaptcha, StepFrame};
use crate::context::use_dice;

/// Step 3: Entity Verification.
#[component]
pub fn Captcha(step: Signal<Step>) -> Element {
    let mut dice = use_dice();
    let board = use_signal(|| CaptchaBoard::new(&mut *dice.write()));

    rsx! {
        StepFrame { step, here: Step::Captcha,
            AlienCaptcha { board }
        }
    }
}
