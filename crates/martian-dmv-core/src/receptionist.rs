//! Blörp, the ambient AI receptionist.
//!
//! Picks a flavor line on mount, on a randomized recurring tick and on every
//! poke, then types it out one character at a time. A decorative blob
//! wobbles on its own faster timer.

use tracing::trace;

use crate::random::Dice;

pub const RECEPTIONIST_LINES: [&str; 13] = [
    "Welcome to Martian DMV. Your visit today makes my circuits tingle with... something. Joy? No, wait, that's just rust.",
    "Please finish your form before the heat death of the universe. We close at 5.",
    "If you think this line is bad, wait until we open the office on Pluto next century.",
    "Do not touch the tentacle scanner unless you want to be reclassified as a different species.",
    "Your Earth ID is not valid here. Neither is your concept of 'reasonable wait times'.",
    "Need help? Too bad, my help module is perpetually updating.",
    "If you're experiencing frustration, that means the system is working as designed.",
    "Smile! Your frustration feeds our bureaucratic energy reserves.",
    "Remember: In space, no one can hear you complain about paperwork.",
    "Have a complaint? Our suggestion box is located in the Andromeda Galaxy. Good luck!",
    "I am programmed to care about your problems. Recalibration failed: Error 404, care not found.",
    "Your position in queue: 7,492. Estimated wait time: Yes.",
    "Did you try turning your application off and on again? Humans always forget that step.",
];

/// Uniformly chosen receptionist line.
pub fn pick_line(dice: &mut impl Dice) -> &'static str {
    RECEPTIONIST_LINES[dice.below(RECEPTIONIST_LINES.len())]
}

/// Whether a recurring tick should produce a new line.
pub fn should_chime(chance: f64, dice: &mut impl Dice) -> bool {
    dice.chance(chance)
}

/// Character-by-character reveal of one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    line: &'static str,
    revealed: usize,
    total: usize,
}

impl Typewriter {
    /// Replace whatever is on screen with `line`, revealed from nothing.
    pub fn start(&mut self, line: &'static str) {
        self.line = line;
        self.revealed = 0;
        self.total = line.chars().count();
        trace!(chars = self.total, "receptionist started typing");
    }

    /// Reveal one more character. Returns false once the line is complete.
    pub fn advance(&mut self) -> bool {
        if self.revealed < self.total {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    pub fn is_typing(&self) -> bool {
        self.revealed < self.total
    }

    pub fn line(&self) -> &'static str {
        self.line
    }

    /// Text revealed so far.
    pub fn visible(&self) -> &'static str {
        match self.line.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.line[..end],
            None => self.line,
        }
    }
}

/// Scale (percent) and rotation (degrees) of the receptionist's blob body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub scale: f64,
    pub rotation: f64,
}

impl Default for Blob {
    fn default() -> Self {
        Self {
            scale: 100.0,
            rotation: 0.0,
        }
    }
}

impl Blob {
    pub const MIN_SCALE: f64 = 90.0;
    pub const MAX_SCALE: f64 = 110.0;
    pub const SCALE_STEP: f64 = 5.0;
    pub const ROTATION_STEP: f64 = 3.0;

    pub fn wobble(&mut self, dice: &mut impl Dice) {
        let grow = dice.between(-Self::SCALE_STEP, Self::SCALE_STEP);
        self.scale = (self.scale + grow).clamp(Self::MIN_SCALE, Self::MAX_SCALE);
        self.rotation += dice.between(-Self::ROTATION_STEP, Self::ROTATION_STEP);
    }

    /// CSS transform for the blob.
    pub fn transform(&self) -> String {
        format!(
            "rotate({:.2}deg) scale({:.3})",
            self.rotation,
            self.scale / 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDice;

    #[test]
    fn typewriter_reveals_one_char_per_step() {
        let mut tw = Typewriter::default();
        assert!(!tw.is_typing());
        tw.start("Blörp!");
        assert_eq!(tw.visible(), "");
        let mut steps = 0;
        while tw.advance() {
            steps += 1;
        }
        assert_eq!(steps, 6);
        assert_eq!(tw.visible(), "Blörp!");
        assert!(!tw.is_typing());
    }

    #[test]
    fn typewriter_handles_multibyte_chars() {
        let mut tw = Typewriter::default();
        tw.start("Blörp");
        for _ in 0..3 {
            tw.advance();
        }
        assert_eq!(tw.visible(), "Blö");
    }

    #[test]
    fn restarting_replaces_the_line() {
        let mut tw = Typewriter::default();
        tw.start(RECEPTIONIST_LINES[0]);
        tw.advance();
        tw.start(RECEPTIONIST_LINES[1]);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.line(), RECEPTIONIST_LINES[1]);
    }

    #[test]
    fn pick_line_uses_dice() {
        let mut dice = ScriptedDice::new().with_picks([12]);
        assert_eq!(pick_line(&mut dice), RECEPTIONIST_LINES[12]);
    }

    #[test]
    fn chime_is_a_coin_flip() {
        let mut dice = ScriptedDice::new().with_units([0.3, 0.7]);
        assert!(should_chime(0.5, &mut dice));
        assert!(!should_chime(0.5, &mut dice));
    }

    #[test]
    fn blob_scale_is_clamped() {
        let mut blob = Blob::default();
        // unit 0.999 ≈ +5 growth, 0.5 = no rotation
        let mut dice = ScriptedDice::new().with_units([0.999, 0.5].repeat(10));
        for _ in 0..10 {
            blob.wobble(&mut dice);
        }
        assert_eq!(blob.scale, Blob::MAX_SCALE);
        assert!(blob.rotation.abs() < 1e-9);
    }

    #[test]
    fn blob_transform_is_css() {
        let blob = Blob { scale: 95.0, rotation: -2.5 };
        assert_eq!(blob.transform(), "rotate(-2.50deg) scale(0.950)");
    }
}
