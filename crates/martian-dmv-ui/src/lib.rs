//! Martian DMV UI Components
//!
//! Dioxus primitives styled for the holographic government-terminal look
//! of the Martian DMV.
//!
//! ## Design Language
//!
//! - **Mars red / orange**: primary actions ("Begin Processing")
//! - **Alien neon / purple**: secondary actions ("Randomize", "Back")
//! - **Holographic panels**: every step widget sits on one
//!
//! The CSS classes referenced here are defined in the app's theme.

pub mod components;

pub use components::*;
