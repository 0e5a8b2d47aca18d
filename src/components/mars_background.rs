//! Mars Background Component
//!
//! Fixed, non-interactive layer behind the page: gradient, starfield,
//! drifting terrain chunks, asteroids flying in from the right, and a
//! faint grid overlay.

use std::time::Instant;

use dioxus::prelude::*;
use martian_dmv_core::backdrop::{starfield, INITIAL_TERRAIN_CHUNKS};
use martian_dmv_core::Backdrop;

use crate::context::{settings, use_dice};
use crate::timers::use_interval;

#[component]
pub fn MarsBackground() -> Element {
    let mut dice = use_dice();
    let stars = use_hook(|| starfield(&mut *dice.write()));
    let mut backdrop = use_signal(Backdrop::new);
    let mounted = use_hook(Instant::now);

    // Staggered first batch of terrain
    use_hook(move || {
        spawn(async move {
            for _ in 0..INITIAL_TERRAIN_CHUNKS {
                backdrop.write().spawn_terrain(
                    mounted.elapsed(),
                    settings().terrain_lifetime(),
                    &mut *dice.write(),
                );
                tokio::time::sleep(settings().terrain_stagger()).await;
            }
        })
    });

    use_interval(settings().terrain_interval(), move || {
        let now = mounted.elapsed();
        let mut backdrop = backdrop.write();
        backdrop.sweep(now);
        backdrop.spawn_terrain(now, settings().terrain_lifetime(), &mut *dice.write());
    });

    use_interval(settings().asteroid_interval(), move || {
        let now = mounted.elapsed();
        let mut backdrop = backdrop.write();
        let gone = backdrop.sweep(now);
        let id = backdrop.spawn_asteroid(now, &mut *dice.write());
        tracing::trace!(id, gone, live = backdrop.pieces().len(), "asteroid launched");
    });

    rsx! {
        div { class: "mars-background",
            div { class: "mars-gradient" }
            div { class: "stars",
                for (i, star) in stars.iter().enumerate() {
                    div { key: "{i}", class: "star", style: "{star.style()}" }
                }
            }
            for piece in backdrop.read().pieces().iter() {
                div {
                    key: "{piece.id}",
                    class: "{piece.class()}",
                    style: "{piece.style()}",
                }
            }
            div { class: "grid-overlay" }
        }
    }
}
