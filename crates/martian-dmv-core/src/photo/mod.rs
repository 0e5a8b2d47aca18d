//! Galactic ID Photo booth.
//!
//! ## States
//!
//! | State | On screen | Action |
//! |-------|-----------|--------|
//! | Idle | "Ready for your universal ID photo?" | Activate Scanner |
//! | Streaming | live scanner preview | Capture Alien Identity |
//! | Captured | distorted photo + detected features | Retake Photo |
//!
//! When the camera cannot be acquired the booth skips straight to
//! `Captured` with a placeholder portrait. The visitor never sees an error.

mod camera;
mod glitch;

pub use camera::{Camera, CameraSession, CameraStream, SyntheticCamera, UnavailableCamera};
pub use glitch::{alienize, saturate, to_png_data_url};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::{debug, warn};

use crate::error::DmvResult;
use crate::random::Dice;

pub const ALIEN_FEATURES: [&str; 8] = [
    "Eye Stalks",
    "Head Ridges",
    "Cosmic Acne",
    "Tentacle Hair",
    "Third Eye",
    "Glowing Skin",
    "Scaled Skin",
    "Antenna",
];

/// Two to four distinct "detected" features.
pub fn detect_features(dice: &mut impl Dice) -> Vec<&'static str> {
    let mut features = ALIEN_FEATURES.to_vec();
    dice.shuffle(&mut features);
    let count = 2 + dice.below(3);
    features.truncate(count);
    features
}

const PLACEHOLDER_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='320' height='320' viewBox='0 0 320 320'>\
<rect width='320' height='320' fill='#1a0b2e'/>\
<ellipse cx='160' cy='150' rx='80' ry='105' fill='#39ff14' opacity='0.75'/>\
<ellipse cx='128' cy='135' rx='22' ry='32' fill='#0a0a0a'/>\
<ellipse cx='192' cy='135' rx='22' ry='32' fill='#0a0a0a'/>\
<text x='160' y='300' font-family='monospace' font-size='16' fill='#9b87f5' text-anchor='middle'>NO SIGNAL</text>\
</svg>";

/// Stand-in portrait used when no camera is available.
pub fn placeholder_portrait() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(PLACEHOLDER_SVG))
}

/// A finished ID photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdPhoto {
    /// Displayable image URL.
    pub image: String,
    pub features: Vec<&'static str>,
    /// True when the placeholder stood in for a real capture.
    pub placeholder: bool,
}

#[derive(Debug, Default)]
pub enum BoothState {
    #[default]
    Idle,
    Streaming {
        session: CameraSession,
        preview: Option<String>,
    },
    Captured(IdPhoto),
}

/// Photo booth widget state. Dropping it releases any live camera.
#[derive(Debug, Default)]
pub struct PhotoBooth {
    state: BoothState,
}

impl PhotoBooth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BoothState {
        &self.state
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.state, BoothState::Streaming { .. })
    }

    pub fn photo(&self) -> Option<&IdPhoto> {
        match &self.state {
            BoothState::Captured(photo) => Some(photo),
            _ => None,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        match &self.state {
            BoothState::Streaming { preview, .. } => preview.as_deref(),
            _ => None,
        }
    }

    /// "Activate Scanner". Falls back to the placeholder if the camera
    /// is denied or missing.
    pub fn activate(&mut self, camera: &dyn Camera, dice: &mut impl Dice) {
        // Any previous session is released before asking for a new one.
        self.state = BoothState::Idle;
        match CameraSession::open(camera) {
            Ok(session) => {
                self.state = BoothState::Streaming {
                    session,
                    preview: None,
                };
            }
            Err(e) => {
                warn!(error = %e, "camera unavailable, using placeholder portrait");
                self.fall_back(dice);
            }
        }
    }

    /// Pull a fresh preview frame while streaming.
    pub fn refresh_preview(&mut self) -> DmvResult<()> {
        if let BoothState::Streaming { session, preview } = &mut self.state {
            let frame = session.preview()?;
            *preview = Some(to_png_data_url(&frame)?);
        }
        Ok(())
    }

    /// "Capture Alien Identity": snapshot, release the camera, distort.
    pub fn capture(&mut self, dice: &mut impl Dice) {
        if !self.is_streaming() {
            return;
        }
        let BoothState::Streaming { mut session, .. } = std::mem::take(&mut self.state) else {
            return;
        };

        let developed = session
            .capture()
            .and_then(|frame| to_png_data_url(&alienize(&frame, dice)));
        drop(session);

        match developed {
            Ok(image) => {
                let features = detect_features(dice);
                debug!(?features, "id photo captured");
                self.state = BoothState::Captured(IdPhoto {
                    image,
                    features,
                    placeholder: false,
                });
            }
            Err(e) => {
                warn!(error = %e, "capture failed, using placeholder portrait");
                self.fall_back(dice);
            }
        }
    }

    /// "Retake Photo".
    pub fn retake(&mut self, camera: &dyn Camera, dice: &mut impl Dice) {
        self.activate(camera, dice);
    }

    fn fall_back(&mut self, dice: &mut impl Dice) {
        self.state = BoothState::Captured(IdPhoto {
            image: placeholder_portrait(),
            features: detect_features(dice),
            placeholder: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedDice;
    use std::collections::HashSet;

    #[test]
    fn features_are_distinct_and_two_to_four() {
        for pick in 0..3 {
            let mut picks = vec![0; 7];
            picks.push(pick);
            let mut dice = ScriptedDice::new().with_picks(picks);
            let features = detect_features(&mut dice);
            assert_eq!(features.len(), 2 + pick);
            let unique: HashSet<_> = features.iter().collect();
            assert_eq!(unique.len(), features.len());
        }
    }

    #[test]
    fn unavailable_camera_falls_back_silently() {
        let mut booth = PhotoBooth::new();
        let mut dice = ScriptedDice::new();
        booth.activate(&UnavailableCamera, &mut dice);
        let photo = booth.photo().unwrap();
        assert!(photo.placeholder);
        assert_eq!(photo.image, placeholder_portrait());
        assert!((2..=4).contains(&photo.features.len()));
    }

    #[test]
    fn synthetic_camera_streams_then_captures() {
        let camera = SyntheticCamera { width: 64, height: 64 };
        let mut booth = PhotoBooth::new();
        let mut dice = ScriptedDice::new();
        booth.activate(&camera, &mut dice);
        assert!(booth.is_streaming());

        booth.refresh_preview().unwrap();
        assert!(booth.preview().unwrap().starts_with("data:image/png"));

        booth.capture(&mut dice);
        let photo = booth.photo().unwrap();
        assert!(!photo.placeholder);
        assert!(photo.image.starts_with("data:image/png;base64,"));
        assert!(!booth.is_streaming());
    }

    #[test]
    fn capture_while_idle_does_nothing() {
        let mut booth = PhotoBooth::new();
        let mut dice = ScriptedDice::new();
        booth.capture(&mut dice);
        assert!(matches!(booth.state(), BoothState::Idle));
    }

    #[test]
    fn retake_goes_back_to_streaming() {
        let camera = SyntheticCamera { width: 32, height: 32 };
        let mut booth = PhotoBooth::new();
        let mut dice = ScriptedDice::new();
        booth.activate(&camera, &mut dice);
        booth.capture(&mut dice);
        booth.retake(&camera, &mut dice);
        assert!(booth.is_streaming());
        assert!(booth.photo().is_none());
    }
}
