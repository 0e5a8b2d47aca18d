//! Tunable timings and constants.
//!
//! Every field has a default, so a settings file only needs the keys it
//! changes:
//!
//! ```json
//! { "captcha_verify_ms": 300, "starting_queue_position": 99 }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DmvError, DmvResult};
use crate::form::QueueTicket;
use crate::navigation::Step;

/// File name looked up under the user's config directory.
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Step shown at launch.
    pub opening_step: Step,

    pub captcha_verify_ms: u64,
    pub captcha_regenerate_ms: u64,
    pub form_processing_ms: u64,
    pub opponent_swap_ms: u64,

    pub assistant_tick_ms: u64,
    /// Probability that an assistant tick produces a new line.
    pub assistant_chance: f64,
    pub typing_interval_ms: u64,
    pub blob_interval_ms: u64,

    pub terrain_interval_ms: u64,
    pub terrain_stagger_ms: u64,
    pub terrain_lifetime_ms: u64,
    pub asteroid_interval_ms: u64,
    pub camera_preview_ms: u64,

    pub starting_queue_position: u32,
    pub ticket_position: u64,
    pub ticket_wait: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            opening_step: Step::Intro,
            captcha_verify_ms: 1500,
            captcha_regenerate_ms: 1000,
            form_processing_ms: 2000,
            opponent_swap_ms: 2000,
            assistant_tick_ms: 15_000,
            assistant_chance: 0.5,
            typing_interval_ms: 30,
            blob_interval_ms: 500,
            terrain_interval_ms: 3000,
            terrain_stagger_ms: 300,
            terrain_lifetime_ms: 20_000,
            asteroid_interval_ms: 5000,
            camera_preview_ms: 200,
            starting_queue_position: 42,
            ticket_position: 42_386_291,
            ticket_wait: "7.3 Earth years".to_string(),
        }
    }
}

impl Settings {
    /// Default location: `<config dir>/martian-dmv/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("martian-dmv").join(SETTINGS_FILE))
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> DmvResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> DmvResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&raw)?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    pub fn from_json(raw: &str) -> DmvResult<Self> {
        let settings: Settings = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> DmvResult<()> {
        if !(0.0..=1.0).contains(&self.assistant_chance) {
            return Err(DmvError::Config(format!(
                "assistant_chance must be within 0..=1, got {}",
                self.assistant_chance
            )));
        }
        if self.starting_queue_position == 0 {
            return Err(DmvError::Config(
                "starting_queue_position must be at least 1".to_string(),
            ));
        }
        let intervals = [
            ("typing_interval_ms", self.typing_interval_ms),
            ("blob_interval_ms", self.blob_interval_ms),
            ("assistant_tick_ms", self.assistant_tick_ms),
            ("terrain_interval_ms", self.terrain_interval_ms),
            ("asteroid_interval_ms", self.asteroid_interval_ms),
            ("camera_preview_ms", self.camera_preview_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, ms)| *ms == 0) {
            return Err(DmvError::Config(format!("{name} must be non-zero")));
        }
        Ok(())
    }

    pub fn captcha_verify_delay(&self) -> Duration {
        Duration::from_millis(self.captcha_verify_ms)
    }

    pub fn captcha_regenerate_delay(&self) -> Duration {
        Duration::from_millis(self.captcha_regenerate_ms)
    }

    pub fn form_processing_delay(&self) -> Duration {
        Duration::from_millis(self.form_processing_ms)
    }

    pub fn opponent_swap_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_swap_ms)
    }

    pub fn assistant_tick(&self) -> Duration {
        Duration::from_millis(self.assistant_tick_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn blob_interval(&self) -> Duration {
        Duration::from_millis(self.blob_interval_ms)
    }

    pub fn terrain_interval(&self) -> Duration {
        Duration::from_millis(self.terrain_interval_ms)
    }

    pub fn terrain_stagger(&self) -> Duration {
        Duration::from_millis(self.terrain_stagger_ms)
    }

    pub fn terrain_lifetime(&self) -> Duration {
        Duration::from_millis(self.terrain_lifetime_ms)
    }

    pub fn asteroid_interval(&self) -> Duration {
        Duration::from_millis(self.asteroid_interval_ms)
    }

    pub fn camera_preview_interval(&self) -> Duration {
        Duration::from_millis(self.camera_preview_ms)
    }

    /// Ticket handed out when an application clears processing.
    pub fn queue_ticket(&self) -> QueueTicket {
        QueueTicket::new(self.ticket_position, self.ticket_wait.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let settings = Settings::from_json(r#"{ "captcha_verify_ms": 10, "opening_step": "game" }"#).unwrap();
        assert_eq!(settings.captcha_verify_delay(), Duration::from_millis(10));
        assert_eq!(settings.opening_step, Step::Game);
        assert_eq!(settings.form_processing_delay(), Duration::from_secs(2));
        assert_eq!(settings.starting_queue_position, 42);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_json(r#"{ "warp_speed": 9 }"#).unwrap_err();
        assert!(matches!(err, DmvError::Json(_)));
    }

    #[test]
    fn out_of_range_chance_is_rejected() {
        let err = Settings::from_json(r#"{ "assistant_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, DmvError::Config(_)));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Settings::from_json(r#"{ "typing_interval_ms": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "Config error: typing_interval_ms must be non-zero");
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ticket_wait": "forever" }}"#).unwrap();
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.queue_ticket().estimated_wait, "forever");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, DmvError::Io(_)));
    }

    #[test]
    fn defaults_serialize_and_reload() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}
