//! One page per step of the renewal flow.
//!
//! Each page owns the state of the widget it shows. The state lives in a
//! signal scoped to the page, so leaving the step discards it.

mod captcha;
mod form;
mod game;
mod intro;
mod photo;

pub use captcha::Captcha;
pub use form::Form;
pub use game::Game;
pub use intro::Intro;
pub use photo::Photo;
