use dioxus::prelude::*;
use martian_dmv_core::{QueueCombat, Step};

use crate::components::{MiniGame, StepFrame};
use crate::context::{settings, use_dice};

/// Step 4: Queue Management.
#[component]
pub fn Game(step: Signal<Step>) -> Element {
    let mut dice = use_dice();
    let combat = use_signal(|| QueueCombat::new(settings().starting_queue_position, &mut *dice.write()));

    rsx! {
        StepFrame { step, here: Step::Game,
            MiniGame { combat }
        }
    }
}
