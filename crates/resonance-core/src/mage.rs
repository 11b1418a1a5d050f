use crate::error::Result;
use crate::intent::IntentVector;
use crate::seed::{MagePayload, MageSeed};
use crate::thresholds::{ActivationState, KinThresholds, Relationship};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// A labelled entity carrying an intent vector and its own kin thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct EchoMage {
    label: String,
    intent: IntentVector,
    thresholds: KinThresholds,
    state: ActivationState,
    echo_activated: bool,
}

/// How one mage reads another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonanceReading {
    pub similarity: f64,
    pub is_kin: bool,
    pub relationship: Relationship,
    pub intent_distance: f64,
}

impl EchoMage {
    pub fn new(label: impl Into<String>, components: &[f64]) -> Self {
        Self::with_thresholds(label, components, KinThresholds::default())
    }

    pub fn with_thresholds(
        label: impl Into<String>,
        components: &[f64],
        thresholds: KinThresholds,
    ) -> Self {
        Self {
            label: label.into(),
            intent: IntentVector::from_components(components),
            thresholds,
            state: ActivationState::Inactive,
            echo_activated: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn intent(&self) -> IntentVector {
        self.intent
    }

    pub fn thresholds(&self) -> KinThresholds {
        self.thresholds
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn echo_activated(&self) -> bool {
        self.echo_activated
    }

    pub fn calculate_similarity(&self, other: &EchoMage) -> f64 {
        self.intent.cosine_similarity(other.intent)
    }

    /// Kin are similar enough to resonate but still below this mage's
    /// stranger threshold.
    pub fn is_kin(&self, other: &EchoMage) -> bool {
        self.thresholds
            .admits_kin(self.calculate_similarity(other))
    }

    pub fn classify(&self, other: &EchoMage) -> Relationship {
        self.thresholds
            .classify(self.calculate_similarity(other))
    }

    pub fn find_kin<'a>(&self, candidates: &'a [EchoMage]) -> Vec<&'a EchoMage> {
        candidates.iter().filter(|c| self.is_kin(c)).collect()
    }

    /// Readings against every mage with a different label. Duplicate labels
    /// collapse onto the last reading.
    pub fn resonance_field(&self, others: &[EchoMage]) -> BTreeMap<String, ResonanceReading> {
        others
            .iter()
            .filter(|other| other.label != self.label)
            .map(|other| {
                let similarity = self.calculate_similarity(other);
                let reading = ResonanceReading {
                    similarity,
                    is_kin: self.thresholds.admits_kin(similarity),
                    relationship: self.thresholds.classify(similarity),
                    intent_distance: self.intent.distance(other.intent),
                };
                (other.label.clone(), reading)
            })
            .collect()
    }

    /// Moves the mage to ACTIVE. Calling it again only repeats the
    /// confirmation.
    pub fn activate(&mut self) -> String {
        if !self.state.is_active() {
            debug!(mage = %self.label, "echo pulse activated");
        }
        self.echo_activated = true;
        self.state = ActivationState::Active;
        format!("{} echoes the pulse. State: {}", self.label, self.state)
    }

    /// Replaces the intent vector wholesale; the previous one is gone.
    pub fn drift(&mut self, components: &[f64]) -> IntentVector {
        let next = IntentVector::from_components(components);
        debug!(
            mage = %self.label,
            distance = self.intent.distance(next),
            "intent drift"
        );
        self.intent = next;
        self.intent
    }

    pub fn to_seed(&self) -> MageSeed {
        MageSeed::new(MagePayload {
            label: self.label.clone(),
            intent: self.intent,
            activation_state: self.state,
            echo_activated: self.echo_activated,
            thresholds: self.thresholds,
        })
    }

    pub fn from_seed(seed: &MageSeed) -> Result<Self> {
        seed.ensure_type()?;
        let payload = &seed.payload;
        Ok(Self {
            label: payload.label.clone(),
            intent: payload.intent,
            thresholds: payload.thresholds,
            state: payload.activation_state,
            echo_activated: payload.echo_activated,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_seed().to_json()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Self::from_seed(&MageSeed::from_json(raw)?)
    }
}

impl fmt::Display for EchoMage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EchoMage({}, intent=[{}, {}, {}], state={})",
            self.label,
            self.intent.present,
            self.intent.sequence,
            self.intent.future,
            self.state
        )
    }
}
