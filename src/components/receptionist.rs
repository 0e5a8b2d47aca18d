//! Blörp, the receptionist.
//!
//! Types out a sarcastic line on mount, may chime in again on every
//! assistant tick, and says something new when clicked. The blob body
//! wobbles on its own timer.

use dioxus::prelude::*;
use martian_dmv_core::receptionist::{pick_line, should_chime};
use martian_dmv_core::{Blob, Typewriter};

use crate::context::{settings, use_dice};
use crate::timers::use_interval;

#[component]
pub fn Receptionist() -> Element {
    let mut dice = use_dice();
    let mut typer = use_signal(|| {
        let mut typer = Typewriter::default();
        typer.start(pick_line(&mut *dice.write()));
        typer
    });
    let mut blob = use_signal(Blob::default);

    use_interval(settings().typing_interval(), move || {
        if typer.peek().is_typing() {
            typer.write().advance();
        }
    });

    use_interval(settings().assistant_tick(), move || {
        if should_chime(settings().assistant_chance, &mut *dice.write()) {
            typer.write().start(pick_line(&mut *dice.write()));
        }
    });

    use_interval(settings().blob_interval(), move || {
        blob.write().wobble(&mut *dice.write());
    });

    let speak = move |_: MouseEvent| {
        typer.write().start(pick_line(&mut *dice.write()));
    };

    let (text, typing) = {
        let typer = typer.read();
        (typer.visible(), typer.is_typing())
    };
    let transform = blob.read().transform();

    rsx! {
        div { class: "receptionist",
            if !text.is_empty() {
                div { class: "speech-bubble",
                    p {
                        "{text}"
                        if typing {
                            span { class: "caret", "|" }
                        }
                    }
                }
            }
            div {
                class: "receptionist-body",
                title: "Click me for assistance (not that I'll help)",
                onclick: speak,
                div { class: "blob", style: "transform: {transform};",
                    div { class: "blob-eye",
                        div { class: "blob-pupil" }
                    }
                }
                span { class: "receptionist-name", "Blörp" }
            }
        }
    }
}
