//! Context providers for the Martian DMV.
//!
//! The App component provides the shared random source and the camera to
//! every widget via use_context. Widget state itself is not shared; each
//! page owns the state of the widget it mounts.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut dice = use_dice();
//! board.write().regenerate(&mut *dice.write());
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use martian_dmv_core::photo::{Camera, SyntheticCamera, UnavailableCamera};
use martian_dmv_core::Settings;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::CameraKind;

/// Shared random source for every widget.
///
/// A `CopyValue` rather than a `Signal`: drawing a number should not
/// re-render anything.
pub type SharedDice = CopyValue<StdRng>;

/// Settings loaded at startup.
pub fn settings() -> &'static Settings {
    &crate::launch_options().settings
}

/// Build the session's random source, seeded from `--seed` if given.
pub fn make_dice() -> StdRng {
    match crate::launch_options().seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Camera handle shared with the photo booth.
#[derive(Clone)]
pub struct CameraHandle(Rc<dyn Camera>);

impl CameraHandle {
    /// Camera selected by `--camera`.
    pub fn from_launch() -> Self {
        match crate::launch_options().camera {
            CameraKind::Synthetic => Self(Rc::new(SyntheticCamera::default())),
            CameraKind::None => Self(Rc::new(UnavailableCamera)),
        }
    }

    pub fn camera(&self) -> &dyn Camera {
        self.0.as_ref()
    }
}

/// Hook to access the shared random source.
pub fn use_dice() -> SharedDice {
    use_context::<SharedDice>()
}

/// Hook to access the photo booth camera.
pub fn use_camera() -> CameraHandle {
    use_context::<CameraHandle>()
}
