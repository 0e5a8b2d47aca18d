//! Seedable random source.
//!
//! Every random decision in the DMV (captcha layout, opponent replies,
//! receptionist lines, backdrop placement, photo glitches) goes through
//! [`Dice`], so tests can swap the OS-seeded generator for a
//! [`ScriptedDice`] that answers from fixed queues.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform random numbers.
pub trait Dice {
    /// Uniform integer in `0..n`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform float in `[lo, hi)`.
    fn between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniformly chosen element, `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }

    /// In-place Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

impl Dice for StdRng {
    fn below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Deterministic dice answering from pre-loaded queues.
///
/// `below` answers are reduced modulo `n`; exhausted queues answer `0`
/// and `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    picks: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for [`Dice::below`].
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue answers for [`Dice::unit`].
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Answers not yet consumed, as `(picks, units)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.picks.len(), self.units.len())
    }
}

impl Dice for ScriptedDice {
    fn below(&mut self, n: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % n
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn scripted_dice_replays_queues() {
        let mut dice = ScriptedDice::new().with_picks([2, 7]).with_units([0.25]);
        assert_eq!(dice.below(3), 2);
        assert_eq!(dice.below(3), 1); // 7 % 3
        assert_eq!(dice.unit(), 0.25);
        assert_eq!(dice.below(5), 0);
        assert_eq!(dice.unit(), 0.0);
    }

    #[test]
    fn shuffle_is_fisher_yates_from_the_back() {
        // i=3 swaps with 0, i=2 stays, i=1 swaps with 0
        let mut dice = ScriptedDice::new().with_picks([0, 2, 0]);
        let mut items = [0, 1, 2, 3];
        dice.shuffle(&mut items);
        assert_eq!(items, [1, 3, 2, 0]);
        assert_eq!(dice.remaining(), (0, 0));
    }

    #[test]
    fn pick_handles_empty_slices() {
        let mut dice = ScriptedDice::new();
        let empty: [u8; 0] = [];
        assert!(dice.pick(&empty).is_none());
        assert_eq!(dice.pick(&["a", "b"]), Some(&"a"));
    }

    #[test]
    fn std_rng_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.below(9) < 9);
            let x = rng.between(-5.0, 5.0);
            assert!((-5.0..5.0).contains(&x));
        }
    }

    #[test]
    fn chance_compares_against_unit() {
        let mut dice = ScriptedDice::new().with_units([0.49, 0.5]);
        assert!(dice.chance(0.5));
        assert!(!dice.chance(0.5));
    }
}
