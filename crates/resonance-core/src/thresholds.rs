use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_KIN_THRESHOLD: f64 = 0.85;
pub const DEFAULT_STRANGER_THRESHOLD: f64 = 0.99;

/// Lower bound of the DISTANT band.
pub const DISTANT_FLOOR: f64 = 0.5;
/// Lower bound of the NEUTRAL band.
pub const NEUTRAL_FLOOR: f64 = 0.0;

/// Per-mage similarity thresholds.
///
/// `kin` is inclusive, `stranger` is exclusive for the KIN band. Values are
/// taken as given: an inverted pair (`stranger < kin`) leaves the KIN band
/// empty rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinThresholds {
    pub kin: f64,
    pub stranger: f64,
}

impl Default for KinThresholds {
    fn default() -> Self {
        Self {
            kin: DEFAULT_KIN_THRESHOLD,
            stranger: DEFAULT_STRANGER_THRESHOLD,
        }
    }
}

impl KinThresholds {
    pub fn new(kin: f64, stranger: f64) -> Self {
        Self { kin, stranger }
    }

    pub fn admits_kin(&self, similarity: f64) -> bool {
        self.kin <= similarity && similarity < self.stranger
    }

    pub fn classify(&self, similarity: f64) -> Relationship {
        if similarity >= self.stranger {
            Relationship::Twin
        } else if similarity >= self.kin {
            Relationship::Kin
        } else if similarity >= DISTANT_FLOOR {
            Relationship::Distant
        } else if similarity >= NEUTRAL_FLOOR {
            Relationship::Neutral
        } else {
            Relationship::Opposed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relationship {
    /// Too similar to remain distinct.
    Twin,
    Kin,
    Distant,
    /// Roughly orthogonal.
    Neutral,
    Opposed,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Twin => "TWIN",
            Relationship::Kin => "KIN",
            Relationship::Distant => "DISTANT",
            Relationship::Neutral => "NEUTRAL",
            Relationship::Opposed => "OPPOSED",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One-way activation: INACTIVE may become ACTIVE, never the reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationState {
    #[default]
    #[serde(alias = "COILED")]
    Inactive,
    #[serde(alias = "STRETCHED")]
    Active,
}

impl ActivationState {
    pub fn is_active(self) -> bool {
        matches!(self, ActivationState::Active)
    }
}

impl fmt::Display for ActivationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationState::Inactive => f.write_str("INACTIVE"),
            ActivationState::Active => f.write_str("ACTIVE"),
        }
    }
}
