//! Martian DMV Core Library
//!
//! Widget logic for the Martian Department of Migration Verification, an
//! intergalactic license renewal simulator. Nothing here knows about
//! rendering: the desktop app keeps these states in signals and draws them.
//!
//! ## Modules
//!
//! - [`navigation`]: the five-step flow
//! - [`photo`]: ID photo booth, camera sessions and the alien filter
//! - [`form`]: the license application form
//! - [`captcha`]: anomaly verification grid
//! - [`game`]: queue combat minigame
//! - [`receptionist`]: Blörp's flavor text and wobble
//! - [`backdrop`]: decorative starfield, terrain and asteroids
//!
//! All randomness goes through [`Dice`] so flows can be replayed.
//!
//! ## Quick Start
//!
//! ```
//! use martian_dmv_core::{game::Weapon, QueueCombat, ScriptedDice};
//!
//! let mut dice = ScriptedDice::new().with_units([0.99]).with_picks([0, 1]);
//! let mut game = QueueCombat::new(42, &mut dice);
//! game.challenge();
//! let round = game.play(Weapon::Laser, &mut dice).unwrap();
//! println!("{}", round.outcome.message());
//! ```

pub mod backdrop;
pub mod captcha;
pub mod error;
pub mod form;
pub mod game;
pub mod navigation;
pub mod photo;
pub mod random;
pub mod receptionist;
pub mod settings;

// Re-exports
pub use backdrop::Backdrop;
pub use captcha::{CaptchaBoard, Verdict};
pub use error::{DmvError, DmvResult};
pub use form::{FormError, FormState};
pub use game::QueueCombat;
pub use navigation::Step;
pub use photo::{Camera, PhotoBooth};
pub use random::{Dice, ScriptedDice};
pub use receptionist::{Blob, Typewriter};
pub use settings::Settings;
