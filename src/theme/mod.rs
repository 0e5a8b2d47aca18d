//! Global styles for the Martian DMV.

mod styles;

pub use styles::GLOBAL_STYLES;
