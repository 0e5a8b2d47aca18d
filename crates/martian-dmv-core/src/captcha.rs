//! Anomaly Verification System
//!
//! A 3x3 grid of placeholder tiles, two to four of which are "quantum
//! anomalies disguised as vending machines". The visitor passes by
//! selecting exactly the anomalies.
//!
//! ## Lifecycle
//!
//! ```text
//! generate ─► toggle* ─► begin_verification ─► finish_verification
//!    ▲                                             │
//!    └──── regenerate (manual after success, ◄─────┘
//!          automatic after repeated failure)
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::random::Dice;

/// Tiles per board.
pub const GRID_SIZE: usize = 9;

/// Inclusive anomaly-count bounds.
pub const MIN_ANOMALIES: usize = 2;
pub const MAX_ANOMALIES: usize = 4;

/// Consecutive failures after which the board reshuffles itself.
pub const REGENERATE_AFTER_FAILURES: u32 = 3;

const FAILURE_MESSAGES: [&str; 4] = [
    "Your perception of quantum anomalies suggests you may be human. Try again.",
    "ERROR: Carbon-based intelligence detected. Recalibrating test.",
    "Are you sure you're not from Earth? Please try again.",
    "Anomaly detection skills: SUBOPTIMAL. Recalibration required.",
];

/// Placeholder tile artwork.
///
/// Anomalies are a flat colour; ordinary tiles carry an inset square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileVisual {
    pub background: u32,
    pub inset: Option<u32>,
}

impl TileVisual {
    fn random(anomaly: bool, dice: &mut impl Dice) -> Self {
        let mut colour = || dice.below(0x100_0000) as u32;
        let background = colour();
        let inset = if anomaly { None } else { Some(colour()) };
        Self { background, inset }
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='100' height='100'>\
             <rect width='100' height='100' fill='#{:06x}'/>",
            self.background
        );
        if let Some(inset) = self.inset {
            svg.push_str(&format!(
                "<rect x='20' y='20' width='60' height='60' fill='#{:06x}'/>",
                inset
            ));
        }
        svg.push_str("</svg>");
        svg
    }

    pub fn to_data_url(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.to_svg()))
    }
}

/// One tile on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptchaCell {
    pub id: usize,
    pub is_anomaly: bool,
    pub visual: TileVisual,
    pub selected: bool,
}

/// Result of checking the visitor's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// Selection mismatch; `regenerate` asks the caller to reshuffle the
    /// board after a short pause.
    Failed { regenerate: bool },
}

/// Board state for the anomaly puzzle.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptchaBoard {
    cells: Vec<CaptchaCell>,
    verified: bool,
    verifying: bool,
    /// Set between a regenerating verdict and the reshuffle.
    regenerating: bool,
    showing_error: bool,
    failed_attempts: u32,
}

impl CaptchaBoard {
    /// Freshly generated board.
    pub fn new(dice: &mut impl Dice) -> Self {
        let mut board = Self {
            cells: Vec::new(),
            verified: false,
            verifying: false,
            regenerating: false,
            showing_error: false,
            failed_attempts: 0,
        };
        board.regenerate(dice);
        board
    }

    /// Lay out a new grid. Clears the verified flag and the visible error;
    /// the failure streak carries over.
    pub fn regenerate(&mut self, dice: &mut impl Dice) {
        let anomaly_count = MIN_ANOMALIES + dice.below(MAX_ANOMALIES - MIN_ANOMALIES + 1);

        let mut positions: Vec<usize> = (0..GRID_SIZE).collect();
        dice.shuffle(&mut positions);
        let anomalies = &positions[..anomaly_count];

        self.cells = (0..GRID_SIZE)
            .map(|id| {
                let is_anomaly = anomalies.contains(&id);
                CaptchaCell {
                    id,
                    is_anomaly,
                    visual: TileVisual::random(is_anomaly, dice),
                    selected: false,
                }
            })
            .collect();
        self.verified = false;
        self.verifying = false;
        self.regenerating = false;
        self.showing_error = false;

        debug!(anomaly_count, "captcha board generated");
    }

    pub fn cells(&self) -> &[CaptchaCell] {
        &self.cells
    }

    pub fn anomaly_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_anomaly).count()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    /// True while a reshuffle is pending; the board is locked until then.
    pub fn is_regenerating(&self) -> bool {
        self.regenerating
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Flip a tile's selection. Ignored while scanning, while a reshuffle
    /// is pending, or once verified.
    pub fn toggle(&mut self, id: usize) {
        if self.is_locked() {
            return;
        }
        if let Some(cell) = self.cells.iter_mut().find(|c| c.id == id) {
            cell.selected = !cell.selected;
        }
        self.showing_error = false;
    }

    /// Enter the "Scanning Brainwaves..." state. Returns false if a scan is
    /// already running, a reshuffle is pending, or the board is solved.
    pub fn begin_verification(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.verifying = true;
        true
    }

    /// True when every tile's selection matches its anomaly flag.
    pub fn selection_matches(&self) -> bool {
        self.cells.iter().all(|c| c.selected == c.is_anomaly)
    }

    /// Judge the selection and leave the scanning state.
    pub fn finish_verification(&mut self) -> Verdict {
        self.verifying = false;

        if self.selection_matches() {
            self.verified = true;
            self.showing_error = false;
            self.failed_attempts = 0;
            debug!("captcha passed");
            Verdict::Passed
        } else {
            self.showing_error = true;
            self.failed_attempts += 1;
            let regenerate = self.failed_attempts >= REGENERATE_AFTER_FAILURES;
            self.regenerating = regenerate;
            debug!(failed_attempts = self.failed_attempts, regenerate, "captcha failed");
            Verdict::Failed { regenerate }
        }
    }

    fn is_locked(&self) -> bool {
        self.verified || self.verifying || self.regenerating
    }

    /// Canned rebuke for the current failure streak, if one is showing.
    pub fn error_message(&self) -> Option<&'static str> {
        if !self.showing_error || self.failed_attempts == 0 {
            return None;
        }
        let idx = (self.failed_attempts as usize - 1).min(FAILURE_MESSAGES.len() - 1);
        Some(FAILURE_MESSAGES[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDice;

    fn board_with_anomalies(extra: usize) -> CaptchaBoard {
        // count pick, then identity shuffle (every j == i), then colours
        let mut picks = vec![extra];
        picks.extend((1..GRID_SIZE).rev());
        let mut dice = ScriptedDice::new().with_picks(picks);
        CaptchaBoard::new(&mut dice)
    }

    fn select_anomalies(board: &mut CaptchaBoard) {
        let ids: Vec<usize> = board.cells().iter().filter(|c| c.is_anomaly).map(|c| c.id).collect();
        for id in ids {
            board.toggle(id);
        }
    }

    #[test]
    fn identity_shuffle_marks_leading_cells() {
        let board = board_with_anomalies(1);
        assert_eq!(board.anomaly_count(), 3);
        let flags: Vec<bool> = board.cells().iter().map(|c| c.is_anomaly).collect();
        assert_eq!(flags, [true, true, true, false, false, false, false, false, false]);
    }

    #[test]
    fn anomaly_visuals_have_no_inset() {
        let board = board_with_anomalies(2);
        for cell in board.cells() {
            assert_eq!(cell.visual.inset.is_none(), cell.is_anomaly);
        }
    }

    #[test]
    fn svg_encodes_colours() {
        let visual = TileVisual { background: 0x00ff00, inset: Some(0xabc) };
        let svg = visual.to_svg();
        assert!(svg.contains("fill='#00ff00'"));
        assert!(svg.contains("fill='#000abc'"));
        assert!(visual.to_data_url().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn exact_selection_passes() {
        let mut board = board_with_anomalies(0);
        select_anomalies(&mut board);
        assert!(board.begin_verification());
        assert_eq!(board.finish_verification(), Verdict::Passed);
        assert!(board.is_verified());
        assert_eq!(board.error_message(), None);
    }

    #[test]
    fn extra_selection_fails() {
        let mut board = board_with_anomalies(0);
        select_anomalies(&mut board);
        let normal = board.cells().iter().find(|c| !c.is_anomaly).map(|c| c.id).unwrap();
        board.toggle(normal);
        board.begin_verification();
        assert_eq!(board.finish_verification(), Verdict::Failed { regenerate: false });
        assert_eq!(board.error_message(), Some(FAILURE_MESSAGES[0]));
    }

    #[test]
    fn failures_escalate_and_regenerate_on_third() {
        let mut board = board_with_anomalies(0);
        let mut verdicts = Vec::new();
        let mut messages = Vec::new();
        for _ in 0..4 {
            assert!(board.begin_verification());
            verdicts.push(board.finish_verification());
            messages.push(board.error_message().unwrap());
            if board.is_regenerating() {
                board.regenerate(&mut ScriptedDice::new());
            }
        }
        assert_eq!(
            verdicts,
            [
                Verdict::Failed { regenerate: false },
                Verdict::Failed { regenerate: false },
                Verdict::Failed { regenerate: true },
                Verdict::Failed { regenerate: true },
            ]
        );
        assert_eq!(messages, FAILURE_MESSAGES.to_vec());
    }

    #[test]
    fn toggle_hides_error_and_is_locked_while_scanning() {
        let mut board = board_with_anomalies(0);
        board.begin_verification();
        board.finish_verification();
        assert!(board.error_message().is_some());

        board.toggle(0);
        assert!(board.error_message().is_none());
        assert!(board.cells()[0].selected);

        board.begin_verification();
        board.toggle(1);
        assert!(!board.cells()[1].selected);
        assert!(!board.begin_verification());
    }

    #[test]
    fn success_resets_streak_and_locks_board() {
        let mut board = board_with_anomalies(0);
        board.begin_verification();
        board.finish_verification();
        assert_eq!(board.failed_attempts(), 1);

        board.toggle(0);
        board.toggle(1);
        board.begin_verification();
        assert_eq!(board.finish_verification(), Verdict::Passed);
        assert_eq!(board.failed_attempts(), 0);

        board.toggle(5);
        assert!(!board.cells()[5].selected);
    }

    #[test]
    fn board_is_locked_until_pending_reshuffle_lands() {
        let mut board = board_with_anomalies(0);
        for _ in 0..3 {
            board.begin_verification();
            board.finish_verification();
        }
        assert!(board.is_regenerating());

        // input made while the reshuffle is pending is refused
        board.toggle(0);
        board.toggle(1);
        assert!(board.cells().iter().all(|c| !c.selected));
        assert!(!board.begin_verification());
        assert!(!board.is_verifying());
        assert_eq!(board.failed_attempts(), 3);

        board.regenerate(&mut ScriptedDice::new().with_picks([0]));
        assert!(!board.is_regenerating());
        select_anomalies(&mut board);
        assert!(board.begin_verification());
        assert_eq!(board.finish_verification(), Verdict::Passed);
    }

    #[test]
    fn regenerate_keeps_streak_but_clears_flags() {
        let mut board = board_with_anomalies(0);
        for _ in 0..3 {
            board.begin_verification();
            board.finish_verification();
        }
        let mut dice = ScriptedDice::new();
        board.regenerate(&mut dice);
        assert_eq!(board.failed_attempts(), 3);
        assert!(board.error_message().is_none());
        assert!(board.cells().iter().all(|c| !c.selected));
        assert!(!board.is_verified());
        assert!(!board.is_regenerating());
    }
}
