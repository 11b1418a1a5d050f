use anyhow::{Context, Result};
use resonance_core::{EchoMage, KinThresholds};
use resonance_network::ResonanceNetwork;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One roster entry. Thresholds fall back to the mage defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub label: String,
    pub intent: Vec<f64>,
    #[serde(default)]
    pub kin_threshold: Option<f64>,
    #[serde(default)]
    pub stranger_threshold: Option<f64>,
}

impl RosterEntry {
    pub fn into_mage(self) -> EchoMage {
        let defaults = KinThresholds::default();
        let thresholds = KinThresholds::new(
            self.kin_threshold.unwrap_or(defaults.kin),
            self.stranger_threshold.unwrap_or(defaults.stranger),
        );
        EchoMage::with_thresholds(self.label, &self.intent, thresholds)
    }
}

pub fn parse_roster(raw: &str) -> Result<ResonanceNetwork> {
    let entries: Vec<RosterEntry> =
        serde_json::from_str(raw).context("roster is not a JSON array of mages")?;
    Ok(entries.into_iter().map(RosterEntry::into_mage).collect())
}

pub fn load_roster(path: &Path) -> Result<ResonanceNetwork> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    parse_roster(&raw).with_context(|| format!("invalid roster {}", path.display()))
}

/// Built-in four-mage roster used by `demo`.
pub fn demo_roster() -> ResonanceNetwork {
    [
        EchoMage::new("Alice", &[1.0, 0.0, 0.0]),
        EchoMage::new("Bob", &[0.99, 0.1, 0.0]),
        EchoMage::new("Charlie", &[0.5, 0.5, 0.5]),
        EchoMage::new("Diana", &[1.0, 0.0, 0.05]),
    ]
    .into_iter()
    .collect()
}
