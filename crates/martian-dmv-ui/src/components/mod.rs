//! Reusable UI components.
//!
//! Buttons, form controls and the loading spinner shared by the step
//! widgets.

mod button;
mod input;
mod spinner;

pub use button::*;
pub use input::*;
pub use spinner::*;
