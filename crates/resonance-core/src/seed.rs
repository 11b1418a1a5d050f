use crate::error::{ResonanceError, Result};
use crate::intent::IntentVector;
use crate::thresholds::{ActivationState, KinThresholds};
use serde::{Deserialize, Serialize, Serializer};

pub const SEED_VERSION: &str = "1.0.0";
pub const MAGE_SEED_TYPE: &str = "EchoMage";

/// Exchange record for a single mage.
///
/// Serializing adds a `derived` block computed from the current payload
/// intent. Loading ignores it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MageSeed {
    pub version: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub payload: MagePayload,
}

#[derive(Serialize)]
struct SeedView<'a> {
    version: &'a str,
    #[serde(rename = "type")]
    entity_type: &'a str,
    payload: &'a MagePayload,
    derived: DerivedIntent,
}

impl Serialize for MageSeed {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SeedView {
            version: &self.version,
            entity_type: &self.entity_type,
            payload: &self.payload,
            derived: self.derived(),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagePayload {
    pub label: String,
    pub intent: IntentVector,
    pub activation_state: ActivationState,
    pub echo_activated: bool,
    pub thresholds: KinThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedIntent {
    pub magnitude: f64,
    pub direction: IntentVector,
}

impl DerivedIntent {
    pub fn of(intent: IntentVector) -> Self {
        Self {
            magnitude: intent.magnitude(),
            direction: intent.normalize(),
        }
    }
}

impl MageSeed {
    pub fn new(payload: MagePayload) -> Self {
        Self {
            version: SEED_VERSION.into(),
            entity_type: MAGE_SEED_TYPE.into(),
            payload,
        }
    }

    pub fn derived(&self) -> DerivedIntent {
        DerivedIntent::of(self.payload.intent)
    }

    /// JSON has no NaN or infinity; such values would be written as `null`
    /// and fail to load.
    pub fn ensure_finite(&self) -> Result<()> {
        let p = &self.payload;
        let thresholds = [p.thresholds.kin, p.thresholds.stranger];
        for value in p.intent.to_array().into_iter().chain(thresholds) {
            if !value.is_finite() {
                return Err(ResonanceError::NonFinite {
                    label: p.label.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn ensure_type(&self) -> Result<()> {
        if self.entity_type != MAGE_SEED_TYPE {
            return Err(ResonanceError::UnexpectedSeedType {
                expected: MAGE_SEED_TYPE.into(),
                found: self.entity_type.clone(),
            });
        }
        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let seed: MageSeed = serde_json::from_str(raw)?;
        seed.ensure_type()?;
        Ok(seed)
    }

    pub fn to_json(&self) -> Result<String> {
        self.ensure_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}
