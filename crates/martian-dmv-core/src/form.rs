//! Intergalactic License Form
//!
//! Mock multi-field submission with ordered validation, a fake processing
//! delay and a fabricated queue ticket at the end.

use thiserror::Error;
use tracing::debug;

use crate::random::Dice;

/// Slider bounds for the post-hyperjump mass field.
pub const MASS_MAX: u8 = 100;
pub const MASS_DEFAULT: u8 = 50;
pub const MASS_MINIMUM: u8 = 20;

/// Systems offered by the "I can't remember my home planet" button.
pub const ORIGIN_SYSTEMS: [&str; 9] = [
    "Zorgon-5",
    "Alpha Centauri B",
    "Trappist-1e",
    "Kepler-186f",
    "Proxima Centauri b",
    "WASP-121b",
    "Gliese 581d",
    "HD 189733b",
    "PSR B1257+12 C",
];

/// Breathable-ish atmosphere preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Atmosphere {
    #[default]
    Oxygen,
    Methane,
    Sulfuric,
    Void,
}

impl Atmosphere {
    pub const ALL: [Atmosphere; 4] = [
        Atmosphere::Oxygen,
        Atmosphere::Methane,
        Atmosphere::Sulfuric,
        Atmosphere::Void,
    ];

    /// Stable identifier used for radio values.
    pub fn key(&self) -> &'static str {
        match self {
            Atmosphere::Oxygen => "oxygen",
            Atmosphere::Methane => "methane",
            Atmosphere::Sulfuric => "sulfuric",
            Atmosphere::Void => "void",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Atmosphere::Oxygen => "Oxygen-based (boring)",
            Atmosphere::Methane => "Methane-rich (spicy)",
            Atmosphere::Sulfuric => "Sulfuric (tangy)",
            Atmosphere::Void => "Cosmic Void (I don't breathe)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

/// The applicant's field values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Application {
    pub designation: String,
    pub origin: String,
    pub mass: u8,
    pub atmosphere: Atmosphere,
    pub leaks_plasma: bool,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            designation: String::new(),
            origin: String::new(),
            mass: MASS_DEFAULT,
            atmosphere: Atmosphere::default(),
            leaks_plasma: false,
        }
    }
}

impl Application {
    /// Check the rules in order; the first failure wins.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.designation.is_empty() {
            return Err(FormError::MissingDesignation);
        }
        if self.origin.is_empty() {
            return Err(FormError::MissingOrigin);
        }
        if self.mass < MASS_MINIMUM {
            return Err(FormError::TooLight(self.mass));
        }
        Ok(())
    }
}

/// Validation failure; `Display` is the message shown to the applicant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Name is required, even if it's unpronounceable by humans.")]
    MissingDesignation,

    #[error("That's not a valid star system, sweetie.")]
    MissingOrigin,

    #[error("You're too light for interstellar travel. Did you forget to count your tentacles?")]
    TooLight(u8),
}

/// Where the application ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueTicket {
    pub position: u64,
    pub estimated_wait: String,
    /// Progress bar fill, in percent.
    pub progress: u8,
}

impl QueueTicket {
    pub fn new(position: u64, estimated_wait: impl Into<String>) -> Self {
        Self {
            position,
            estimated_wait: estimated_wait.into(),
            progress: 2,
        }
    }

    /// Position with comma digit grouping, e.g. `42,386,291`.
    pub fn position_display(&self) -> String {
        group_digits(self.position)
    }
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Processing,
    Submitted(QueueTicket),
}

/// Whole form widget state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub application: Application,
    pub error: Option<FormError>,
    pub phase: FormPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a field edit, clearing any visible error.
    pub fn edit(&mut self, change: impl FnOnce(&mut Application)) {
        change(&mut self.application);
        self.error = None;
    }

    pub fn set_designation(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(|a| a.designation = value);
    }

    pub fn set_origin(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.edit(|a| a.origin = value);
    }

    pub fn set_mass(&mut self, mass: u8) {
        self.edit(|a| a.mass = mass.min(MASS_MAX));
    }

    pub fn set_atmosphere(&mut self, atmosphere: Atmosphere) {
        self.edit(|a| a.atmosphere = atmosphere);
    }

    pub fn set_leaks_plasma(&mut self, leaks: bool) {
        self.edit(|a| a.leaks_plasma = leaks);
    }

    /// Fill the origin with a random known system. Leaves the error as is.
    pub fn randomize_origin(&mut self, dice: &mut impl Dice) {
        if let Some(origin) = dice.pick(&ORIGIN_SYSTEMS) {
            self.application.origin = (*origin).to_string();
        }
    }

    /// Validate and, on success, enter the processing phase.
    ///
    /// Returns true when the caller should start the processing delay.
    pub fn submit(&mut self) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        match self.application.validate() {
            Ok(()) => {
                self.error = None;
                self.phase = FormPhase::Processing;
                debug!(designation = %self.application.designation, "application accepted for processing");
                true
            }
            Err(e) => {
                debug!(error = %e, "application rejected");
                self.error = Some(e);
                false
            }
        }
    }

    /// End the processing delay with a queue ticket.
    pub fn complete(&mut self, ticket: QueueTicket) {
        if self.phase == FormPhase::Processing {
            self.phase = FormPhase::Submitted(ticket);
        }
    }

    pub fn is_processing(&self) -> bool {
        self.phase == FormPhase::Processing
    }

    pub fn ticket(&self) -> Option<&QueueTicket> {
        match &self.phase {
            FormPhase::Submitted(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// "Start Over": everything back to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
