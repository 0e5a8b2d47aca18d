//! Decorative Mars backdrop.
//!
//! Stars are laid out once. Terrain chunks and asteroids are spawned on
//! timers and swept away when their lifetime ends. Times are offsets from
//! when the backdrop was mounted.

use std::time::Duration;

use crate::random::Dice;

pub const STAR_COUNT: usize = 100;
pub const INITIAL_TERRAIN_CHUNKS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Percent of viewport height.
    pub top: f64,
    /// Percent of viewport width.
    pub left: f64,
    /// Pixels.
    pub size: f64,
    pub opacity: f64,
    /// Flicker animation period in seconds.
    pub flicker: f64,
}

impl Star {
    fn random(dice: &mut impl Dice) -> Self {
        Self {
            top: dice.between(0.0, 100.0),
            left: dice.between(0.0, 100.0),
            size: dice.between(1.0, 3.0),
            opacity: dice.between(0.2, 1.0),
            flicker: dice.between(2.0, 5.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; animation: flicker {:.2}s linear infinite;",
            self.top, self.left, self.size, self.size, self.opacity, self.flicker
        )
    }
}

/// Static starfield.
pub fn starfield(dice: &mut impl Dice) -> Vec<Star> {
    (0..STAR_COUNT).map(|_| Star::random(dice)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Terrain,
    Asteroid,
}

/// One transient backdrop element.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: u64,
    pub kind: PieceKind,
    /// Pixels.
    pub size: f64,
    /// Percent of viewport height.
    pub top: f64,
    /// Percent of viewport width. Asteroids always enter from the right.
    pub left: Option<f64>,
    /// Terrain: animation delay. Asteroid: flight duration.
    pub animation: Duration,
    pub expires_at: Duration,
}

impl Piece {
    pub fn class(&self) -> &'static str {
        match self.kind {
            PieceKind::Terrain => "terrain-chunk",
            PieceKind::Asteroid => "asteroid",
        }
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "width: {size:.0}px; height: {size:.0}px; top: {:.2}vh;",
            self.top,
            size = self.size
        );
        match (self.kind, self.left) {
            (PieceKind::Terrain, Some(left)) => style.push_str(&format!(
                " left: {:.2}vw; animation-delay: {:.2}s;",
                left,
                self.animation.as_secs_f64()
            )),
            _ => style.push_str(&format!(
                " right: -100px; animation-duration: {:.2}s;",
                self.animation.as_secs_f64()
            )),
        }
        style
    }
}

/// Live set of transient backdrop elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Backdrop {
    pieces: Vec<Piece>,
    next_id: u64,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Drop a terrain chunk somewhere on screen, living `lifetime`.
    pub fn spawn_terrain(&mut self, now: Duration, lifetime: Duration, dice: &mut impl Dice) -> u64 {
        let piece = Piece {
            id: self.bump_id(),
            kind: PieceKind::Terrain,
            size: dice.between(50.0, 200.0),
            top: dice.between(0.0, 100.0),
            left: Some(dice.between(0.0, 100.0)),
            animation: Duration::from_secs_f64(dice.between(0.0, 10.0)),
            expires_at: now + lifetime,
        };
        let id = piece.id;
        self.pieces.push(piece);
        id
    }

    /// Launch an asteroid from the right edge; it lives as long as its flight.
    pub fn spawn_asteroid(&mut self, now: Duration, dice: &mut impl Dice) -> u64 {
        let size = dice.between(30.0, 130.0);
        let top = dice.between(0.0, 100.0);
        let flight = Duration::from_secs_f64(dice.between(10.0, 20.0));
        let piece = Piece {
            id: self.bump_id(),
            kind: PieceKind::Asteroid,
            size,
            top,
            left: None,
            animation: flight,
            expires_at: now + flight,
        };
        let id = piece.id;
        self.pieces.push(piece);
        id
    }

    /// Remove everything whose lifetime has ended. Returns how many went.
    pub fn sweep(&mut self, now: Duration) -> usize {
        let before = self.pieces.len();
        self.pieces.retain(|p| p.expires_at > now);
        before - self.pieces.len()
    }

    fn bump_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDice;

    const LIFETIME: Duration = Duration::from_secs(20);

    #[test]
    fn starfield_has_fixed_size_and_ranges() {
        let mut dice = ScriptedDice::new().with_units([0.5; 500]);
        let stars = starfield(&mut dice);
        assert_eq!(stars.len(), STAR_COUNT);
        let star = stars[0];
        assert_eq!(star.top, 50.0);
        assert_eq!(star.size, 2.0);
        assert!((star.opacity - 0.6).abs() < 1e-9);
        assert_eq!(star.flicker, 3.5);
    }

    #[test]
    fn terrain_expires_after_lifetime() {
        let mut dice = ScriptedDice::new();
        let mut backdrop = Backdrop::new();
        backdrop.spawn_terrain(Duration::ZERO, LIFETIME, &mut dice);
        backdrop.spawn_terrain(Duration::from_secs(3), LIFETIME, &mut dice);

        assert_eq!(backdrop.sweep(Duration::from_secs(19)), 0);
        assert_eq!(backdrop.sweep(Duration::from_secs(20)), 1);
        assert_eq!(backdrop.pieces().len(), 1);
        assert_eq!(backdrop.sweep(Duration::from_secs(23)), 1);
        assert!(backdrop.pieces().is_empty());
    }

    #[test]
    fn asteroid_lives_for_its_flight() {
        // size, top, then flight 10 + 10 * 0.5 = 15s
        let mut dice = ScriptedDice::new().with_units([0.0, 0.0, 0.5]);
        let mut backdrop = Backdrop::new();
        backdrop.spawn_asteroid(Duration::from_secs(5), &mut dice);
        let asteroid = &backdrop.pieces()[0];
        assert_eq!(asteroid.size, 30.0);
        assert_eq!(asteroid.expires_at, Duration::from_secs(20));
        assert!(asteroid.style().contains("right: -100px"));
    }

    #[test]
    fn ids_are_unique() {
        let mut dice = ScriptedDice::new();
        let mut backdrop = Backdrop::new();
        let a = backdrop.spawn_terrain(Duration::ZERO, LIFETIME, &mut dice);
        let b = backdrop.spawn_asteroid(Duration::ZERO, &mut dice);
        assert_ne!(a, b);
    }

    #[test]
    fn terrain_style_positions_from_left() {
        let mut dice = ScriptedDice::new().with_units([0.0, 0.5, 0.25, 0.1]);
        let mut backdrop = Backdrop::new();
        backdrop.spawn_terrain(Duration::ZERO, LIFETIME, &mut dice);
        let style = backdrop.pieces()[0].style();
        assert!(style.contains("width: 50px"));
        assert!(style.contains("top: 50.00vh"));
        assert!(style.contains("left: 25.00vw"));
        assert!(style.contains("animation-delay: 1.00s"));
    }
}
