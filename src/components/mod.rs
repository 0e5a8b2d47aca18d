//! UI Components for the Martian DMV.
//!
//! Page chrome (header, step frame, footer, backdrop, receptionist) and
//! the four step widgets.

mod alien_captcha;
mod alien_form;
mod footer;
mod mars_background;
mod mini_game;
mod nav_header;
mod photo_booth;
mod receptionist;
mod step_frame;

pub use alien_captcha::AlienCaptcha;
pub use alien_form::AlienForm;
pub use footer::{Marquee, PageFooter};
pub use mars_background::MarsBackground;
pub use mini_game::MiniGame;
pub use nav_header::NavHeader;
pub use photo_booth::PhotoBooth;
pub use receptionist::Receptionist;
pub use step_frame::StepFrame;
