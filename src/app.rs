use dioxus::prelude::*;
use martian_dmv_core::{Dice, Step};

use crate::components::{Marquee, MarsBackground, NavHeader, PageFooter, Receptionist};
use crate::context::{make_dice, settings, CameraHandle, SharedDice};
use crate::pages::{Captcha, Form, Game, Intro, Photo};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shared random source and the camera, and
/// owns the current step. Switching steps unmounts the previous page,
/// which drops its widget state and cancels its timers.
#[component]
pub fn App() -> Element {
    let mut dice: SharedDice = use_hook(|| CopyValue::new(make_dice()));
    use_context_provider(|| dice);
    use_context_provider(CameraHandle::from_launch);

    let step = use_signal(|| settings().opening_step);
    let request_number = use_hook(|| dice.write().below(10_000));

    use_effect(move || {
        tracing::debug!(step = ?step(), "step changed");
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        MarsBackground {}
        div { class: "page-shell",
            NavHeader { step }
            main { class: "page-main",
                match step() {
                    Step::Intro => rsx! { Intro { step, request_number } },
                    Step::Photo => rsx! { Photo { step } },
                    Step::Form => rsx! { Form { step } },
                    Step::Captcha => rsx! { Captcha { step } },
                    Step::Game => rsx! { Game { step } },
                }
            }
            PageFooter {}
            Marquee {}
        }
        Receptionist {}
    }
}
