//! Queue Combat System widget.
//!
//! Waiting → Choosing → Finished, then "Challenge Again". The opponent
//! changes a couple of seconds after each round.

use dioxus::prelude::*;
use martian_dmv_core::game::{GameStatus, Opponent, Outcome, Weapon};
use martian_dmv_core::QueueCombat;
use martian_dmv_ui::{Button, ButtonVariant};

use crate::context::{settings, use_dice};
use crate::timers::after;

/// Initials shown in the opponent's portrait frame.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect()
}

fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "result-banner win",
        Outcome::Lose => "result-banner lose",
        Outcome::Draw => "result-banner draw",
    }
}

#[component]
fn OpponentCard(opponent: Opponent) -> Element {
    rsx! {
        div { class: "opponent-card",
            div { class: "opponent-portrait", "{initials(opponent.name)}" }
            span { class: "opponent-name", "{opponent.name}" }
        }
    }
}

#[component]
pub fn MiniGame(combat: Signal<QueueCombat>) -> Element {
    let mut combat = combat;
    let mut dice = use_dice();

    let challenge = move |_: ()| combat.write().challenge();

    let mut play = move |weapon: Weapon| {
        let round = combat.write().play(weapon, &mut *dice.write());
        if round.is_some() {
            after(settings().opponent_swap_delay(), move || {
                combat.write().promote_next_opponent();
            });
        }
    };

    let game = combat.read().clone();
    let opponent = game.opponent();

    rsx! {
        div { class: "holographic widget",
            h2 { class: "widget-title", "Queue Combat System" }

            div { class: "queue-status",
                p {
                    "Current position: "
                    span { class: "queue-position", "{game.position()}" }
                }
                if let Some(message) = game.skip_message() {
                    p { class: "skip-message", "{message}" }
                }
            }

            match game.status() {
                GameStatus::Waiting => rsx! {
                    div { class: "game-panel",
                        p { "Challenge other visitors to skip the line!" }
                        OpponentCard { opponent }
                        Button { variant: ButtonVariant::Mars, onclick: challenge, "Challenge to Duel!" }
                    }
                },
                GameStatus::Choosing => rsx! {
                    div { class: "game-panel",
                        p { "Choose your weapon to challenge {opponent.name}!" }
                        div { class: "weapon-grid",
                            for weapon in Weapon::ALL {
                                button {
                                    key: "{weapon.label()}",
                                    class: "weapon-button",
                                    onclick: move |_| play(weapon),
                                    span { class: "weapon-icon", "{weapon.icon()}" }
                                    p { "{weapon.label()}" }
                                }
                            }
                        }
                        p { class: "rules-heading", "Rules:" }
                        div { class: "rules",
                            for (i, weapon) in Weapon::ALL.into_iter().enumerate() {
                                if i > 0 {
                                    span { "•" }
                                }
                                span { "{weapon.label()} beats {weapon.beats().label()}" }
                            }
                        }
                    }
                },
                GameStatus::Finished(round) => rsx! {
                    div { class: "game-panel",
                        div { class: "duel",
                            div {
                                p { "You chose:" }
                                div { class: "weapon-icon", "{round.player.icon()}" }
                            }
                            div { class: "versus", "VS" }
                            div {
                                p { "They chose:" }
                                div { class: "weapon-icon", "{round.opponent_choice.icon()}" }
                            }
                        }
                        div { class: outcome_class(round.outcome),
                            p { "{round.outcome.message()}" }
                        }
                        Button { variant: ButtonVariant::Alien, onclick: challenge, "Challenge Again" }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_roster_names() {
        assert_eq!(initials("Zorg-9000"), "Z");
        assert_eq!(initials("Kraxon the Destroyer"), "KD");
        assert_eq!(initials("Xeno Tourist"), "XT");
    }
}
