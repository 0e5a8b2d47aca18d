//! Property-based tests for the DMV widgets
//!
//! Uses proptest over seeded generators to check the invariants every
//! widget must hold no matter how the dice fall.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use martian_dmv_core::captcha::{CaptchaBoard, Verdict, GRID_SIZE, MAX_ANOMALIES, MIN_ANOMALIES};
use martian_dmv_core::game::{Outcome, QueueCombat, Weapon, ROSTER};
use martian_dmv_core::photo::{detect_features, ALIEN_FEATURES};
use martian_dmv_core::receptionist::{pick_line, Blob, RECEPTIONIST_LINES};
use martian_dmv_core::Step;

// ============================================================================
// Strategy Generators
// ============================================================================

fn weapon_strategy() -> impl Strategy<Value = Weapon> {
    prop_oneof![Just(Weapon::Laser), Just(Weapon::Asteroid), Just(Weapon::Forcefield)]
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop::sample::select(Step::ALL.to_vec())
}

/// Navigation actions a visitor can take from a page.
#[derive(Debug, Clone, Copy)]
enum NavOp {
    Forward,
    Back,
    Skip,
    Tab(usize),
}

fn nav_ops_strategy() -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Forward),
            2 => Just(NavOp::Back),
            1 => Just(NavOp::Skip),
            1 => (0..Step::TABS.len()).prop_map(NavOp::Tab),
        ],
        0..50,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every board has 2..=4 anomalies among exactly 9 tiles
    #[test]
    fn anomaly_count_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = CaptchaBoard::new(&mut rng);
        prop_assert_eq!(board.cells().len(), GRID_SIZE);
        let count = board.anomaly_count();
        prop_assert!((MIN_ANOMALIES..=MAX_ANOMALIES).contains(&count));
    }

    /// Verification passes iff the selection equals the anomaly set exactly
    #[test]
    fn verification_iff_exact_match(seed in any::<u64>(), picks in prop::collection::vec(any::<bool>(), GRID_SIZE)) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = CaptchaBoard::new(&mut rng);
        for (id, pick) in picks.iter().enumerate() {
            if *pick {
                board.toggle(id);
            }
        }
        let expected = board.cells().iter().all(|c| c.selected == c.is_anomaly);
        prop_assert!(board.begin_verification());
        let verdict = board.finish_verification();
        prop_assert_eq!(verdict == Verdict::Passed, expected);
    }

    /// Outcome depends only on the two weapons, per the cyclic rule
    #[test]
    fn outcome_follows_cycle(player in weapon_strategy(), opponent in weapon_strategy()) {
        let outcome = Outcome::decide(player, opponent);
        let expected = if player == opponent {
            Outcome::Draw
        } else if matches!(
            (player, opponent),
            (Weapon::Laser, Weapon::Asteroid)
                | (Weapon::Asteroid, Weapon::Forcefield)
                | (Weapon::Forcefield, Weapon::Laser)
        ) {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        prop_assert_eq!(outcome, expected);
        prop_assert_eq!(Outcome::decide(opponent, player) == Outcome::Win, outcome == Outcome::Lose);
    }

    /// Queue position tracks outcomes and never drops below 1
    #[test]
    fn queue_position_accounting(seed in any::<u64>(), moves in prop::collection::vec(weapon_strategy(), 1..40)) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = QueueCombat::new(42, &mut rng);
        let mut expected = 42u32;
        let mut skipped = 0u32;
        for weapon in moves {
            game.challenge();
            let round = game.play(weapon, &mut rng).unwrap();
            match round.outcome {
                Outcome::Win => {
                    expected = expected.saturating_sub(5).max(1);
                    skipped += 5;
                }
                Outcome::Lose => expected += 3,
                Outcome::Draw => {}
            }
            prop_assert_eq!(round.outcome, Outcome::decide(round.player, round.opponent_choice));
            let before = game.opponent();
            game.promote_next_opponent();
            prop_assert_ne!(before.name, game.opponent().name);
            prop_assert!(ROSTER.contains(&game.opponent()));
        }
        prop_assert_eq!(game.position(), expected);
        prop_assert_eq!(game.skipped(), skipped);
        prop_assert!(game.position() >= 1);
    }

    /// Any sequence of navigation actions stays inside the five steps
    #[test]
    fn navigation_is_closed(start in step_strategy(), ops in nav_ops_strategy()) {
        let mut step = start;
        for op in ops {
            step = match op {
                NavOp::Forward => step.forward(),
                NavOp::Back => step.back().unwrap_or(step),
                NavOp::Skip => step.skip_the_line(),
                NavOp::Tab(i) => Step::TABS[i],
            };
            prop_assert!(Step::ALL.contains(&step));
        }
    }

    /// Receptionist lines always come from the script and are non-empty
    #[test]
    fn receptionist_lines_in_set(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 {
            let line = pick_line(&mut rng);
            prop_assert!(!line.is_empty());
            prop_assert!(RECEPTIONIST_LINES.contains(&line));
        }
    }

    /// Blob scale stays within bounds under any wobble sequence
    #[test]
    fn blob_scale_bounded(seed in any::<u64>(), steps in 1..200usize) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut blob = Blob::default();
        for _ in 0..steps {
            blob.wobble(&mut rng);
            prop_assert!((Blob::MIN_SCALE..=Blob::MAX_SCALE).contains(&blob.scale));
        }
    }

    /// Detected features are 2..=4 distinct entries from the catalogue
    #[test]
    fn features_distinct(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let features = detect_features(&mut rng);
        prop_assert!((2..=4).contains(&features.len()));
        for (i, f) in features.iter().enumerate() {
            prop_assert!(ALIEN_FEATURES.contains(f));
            prop_assert!(!features[i + 1..].contains(f));
        }
    }
}
