//! Page-level navigation state machine.
//!
//! The DMV flow is a closed set of five steps. Every transition is driven by
//! an explicit button press; there are no automatic transitions and no
//! guards.
//!
//! | Step | back | forward |
//! |------|------|---------|
//! | Intro | - | Photo (or Game via "Skip the Line") |
//! | Photo | Intro | Form |
//! | Form | Photo | Captcha |
//! | Captcha | Form | Game |
//! | Game | Captcha | Intro |

use serde::{Deserialize, Serialize};

/// The step widget currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Intro,
    Photo,
    Form,
    Captcha,
    Game,
}

impl Step {
    /// All steps in flow order.
    pub const ALL: [Step; 5] = [Step::Intro, Step::Photo, Step::Form, Step::Captcha, Step::Game];

    /// Steps listed in the header navigation.
    pub const TABS: [Step; 4] = [Step::Photo, Step::Form, Step::Captcha, Step::Game];

    /// Next step in the flow. The game desk wraps back to the intro.
    pub fn forward(self) -> Step {
        match self {
            Step::Intro => Step::Photo,
            Step::Photo => Step::Form,
            Step::Form => Step::Captcha,
            Step::Captcha => Step::Game,
            Step::Game => Step::Intro,
        }
    }

    /// Previous step, `None` on the intro desk.
    pub fn back(self) -> Option<Step> {
        match self {
            Step::Intro => None,
            Step::Photo => Some(Step::Intro),
            Step::Form => Some(Step::Photo),
            Step::Captcha => Some(Step::Form),
            Step::Game => Some(Step::Captcha),
        }
    }

    /// The intro's shortcut straight to queue combat.
    pub fn skip_the_line(self) -> Step {
        Step::Game
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Step::Intro => "intro",
            Step::Photo => "photo",
            Step::Form => "form",
            Step::Captcha => "captcha",
            Step::Game => "game",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Intro => "Martian DMV",
            Step::Photo => "Step 1: Identification",
            Step::Form => "Step 2: Information Submission",
            Step::Captcha => "Step 3: Entity Verification",
            Step::Game => "Step 4: Queue Management",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Step::Intro => "Intergalactic License Renewal Simulator",
            Step::Photo => "Please provide a valid facial scan for your ID",
            Step::Form => "Please provide your personal details",
            Step::Captcha => "Prove you're not from Earth",
            Step::Game => "Challenge others to improve your position",
        }
    }

    /// Label of the button that calls [`Step::forward`].
    pub fn forward_label(self) -> &'static str {
        match self {
            Step::Intro => "Begin Processing",
            Step::Photo => "Continue to Forms",
            Step::Form => "Continue to Verification",
            Step::Captcha => "Continue to Queue",
            Step::Game => "Return to Main Desk",
        }
    }

    /// Label of the button that calls [`Step::back`].
    pub fn back_label(self) -> Option<&'static str> {
        match self {
            Step::Intro => None,
            Step::Photo => Some("Back to Main Desk"),
            Step::Form => Some("Back to Photo"),
            Step::Captcha => Some("Back to Form"),
            Step::Game => Some("Back to Verification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_intro() {
        assert_eq!(Step::default(), Step::Intro);
    }

    #[test]
    fn forward_walks_the_whole_flow() {
        let mut step = Step::Intro;
        let mut seen = vec![step];
        for _ in 0..4 {
            step = step.forward();
            seen.push(step);
        }
        assert_eq!(seen, Step::ALL.to_vec());
        assert_eq!(step.forward(), Step::Intro);
    }

    #[test]
    fn back_undoes_forward_except_at_the_wrap() {
        for step in Step::ALL {
            if step == Step::Game {
                continue;
            }
            assert_eq!(step.forward().back(), Some(step));
        }
        assert_eq!(Step::Intro.back(), None);
    }

    #[test]
    fn back_label_exists_iff_back_does() {
        for step in Step::ALL {
            assert_eq!(step.back().is_some(), step.back_label().is_some());
        }
    }

    #[test]
    fn skip_the_line_lands_on_game() {
        assert_eq!(Step::Intro.skip_the_line(), Step::Game);
    }

    #[test]
    fn tabs_exclude_intro() {
        assert!(!Step::TABS.contains(&Step::Intro));
        assert_eq!(Step::TABS.len(), 4);
    }

    #[test]
    fn serde_uses_tab_labels() {
        for step in Step::ALL {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{}\"", step.tab_label()));
        }
    }
}
