//! Anomaly Verification System widget.

use dioxus::prelude::*;
use martian_dmv_core::{CaptchaBoard, Verdict};
use martian_dmv_ui::{Button, ButtonVariant, Spinner};

use crate::context::{settings, use_dice};
use crate::timers::after;

#[component]
pub fn AlienCaptcha(board: Signal<CaptchaBoard>) -> Element {
    let mut board = board;
    let mut dice = use_dice();

    let verify = move |_: ()| {
        if !board.write().begin_verification() {
            return;
        }
        after(settings().captcha_verify_delay(), move || {
            let verdict = board.write().finish_verification();
            if let Verdict::Failed { regenerate: true } = verdict {
                after(settings().captcha_regenerate_delay(), move || {
                    board.write().regenerate(&mut *dice.write());
                });
            }
        });
    };

    let regenerate = move |_: ()| board.write().regenerate(&mut *dice.write());

    let current = board.read().clone();

    rsx! {
        div { class: "holographic widget",
            h2 { class: "widget-title", "Anomaly Verification System" }

            if current.is_verified() {
                div { class: "captcha-passed",
                    div { class: "check-badge",
                        svg {
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            path {
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: "M5 13l4 4L19 7",
                            }
                        }
                    }
                    p { class: "passed-title", "Anomaly detection verified!" }
                    p { class: "passed-note", "You are clearly not an inferior human." }
                    Button { variant: ButtonVariant::Mars, onclick: regenerate, "Regenerate Captcha" }
                }
            } else {
                p { class: "widget-lead",
                    "Select all quantum anomalies disguised as vending machines to prove you're not human"
                }

                if let Some(message) = current.error_message() {
                    div { class: "error-banner", p { "{message}" } }
                }

                div { class: "captcha-grid",
                    for cell in current.cells().iter().cloned() {
                        {
                            let id = cell.id;
                            let class = if cell.selected { "captcha-tile selected" } else { "captcha-tile" };
                            let src = cell.visual.to_data_url();
                            rsx! {
                                div {
                                    key: "{id}",
                                    class,
                                    onclick: move |_| board.write().toggle(id),
                                    img { src, alt: "Captcha item" }
                                    if cell.selected {
                                        div { class: "tile-check", "✓" }
                                    }
                                }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Alien,
                    class: "w-full",
                    disabled: current.is_verifying() || current.is_regenerating(),
                    onclick: verify,
                    if current.is_verifying() {
                        Spinner { label: "Scanning Brainwaves...".to_string() }
                    } else {
                        "Verify Anomaly Recognition"
                    }
                }
            }
        }
    }
}
