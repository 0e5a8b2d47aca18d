//! Galactic ID Photo
//!
//! Idle → Streaming → Captured, driven by [`photo::PhotoBooth`]. While
//! streaming, the preview is refreshed on a timer. The camera session
//! lives inside the booth, so unmounting the page releases it.

use dioxus::prelude::*;
use martian_dmv_core::photo::{self, BoothState, IdPhoto};
use martian_dmv_ui::{Button, ButtonVariant};
use tracing::warn;

use crate::context::{settings, use_camera, use_dice};
use crate::timers::use_interval;

/// Render-side copy of the booth state.
#[derive(Clone, PartialEq)]
enum BoothView {
    Idle,
    Streaming(Option<String>),
    Captured(IdPhoto),
}

impl BoothView {
    fn of(booth: &photo::PhotoBooth) -> Self {
        match booth.state() {
            BoothState::Idle => BoothView::Idle,
            BoothState::Streaming { preview, .. } => BoothView::Streaming(preview.clone()),
            BoothState::Captured(photo) => BoothView::Captured(photo.clone()),
        }
    }
}

#[component]
pub fn PhotoBooth(booth: Signal<photo::PhotoBooth>) -> Element {
    let mut booth = booth;
    let mut dice = use_dice();
    let camera = use_camera();

    use_interval(settings().camera_preview_interval(), move || {
        if !booth.peek().is_streaming() {
            return;
        }
        if let Err(e) = booth.write().refresh_preview() {
            warn!(error = %e, "scanner preview failed");
        }
    });

    let activate = {
        let camera = camera.clone();
        move |_: ()| booth.write().activate(camera.camera(), &mut *dice.write())
    };
    let retake = move |_: ()| booth.write().retake(camera.camera(), &mut *dice.write());
    let capture = move |_: ()| booth.write().capture(&mut *dice.write());

    let view = BoothView::of(&booth.read());

    rsx! {
        div { class: "holographic widget",
            h2 { class: "widget-title", "Galactic ID Photo" }
            p { class: "widget-lead", "Your facial scan will be distorted to reveal your true alien form" }

            div { class: "photo-frame",
                match &view {
                    BoothView::Idle => rsx! {
                        div { class: "photo-idle",
                            p {
                                "Ready for your universal ID photo?"
                                br {}
                                "We'll make sure you don't look too human!"
                            }
                            Button { variant: ButtonVariant::Alien, onclick: activate, "Activate Scanner" }
                        }
                    },
                    BoothView::Streaming(Some(frame)) => rsx! {
                        img { class: "photo-image", src: "{frame}", alt: "Scanner feed" }
                    },
                    BoothView::Streaming(None) => rsx! {
                        div { class: "photo-idle", p { "Warming up scanner..." } }
                    },
                    BoothView::Captured(photo) => rsx! {
                        img { class: "photo-image", src: "{photo.image}", alt: "Your alien ID" }
                    },
                }
            }

            match view {
                BoothView::Streaming(_) => rsx! {
                    Button { variant: ButtonVariant::Mars, class: "w-full", onclick: capture, "Capture Alien Identity" }
                },
                BoothView::Captured(photo) => rsx! {
                    div { class: "feature-panel",
                        h3 { "Alien Features Detected:" }
                        ul {
                            for feature in photo.features {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                    }
                    Button { variant: ButtonVariant::Alien, class: "w-full", onclick: retake, "Retake Photo" }
                },
                BoothView::Idle => rsx! {},
            }
        }
    }
}
