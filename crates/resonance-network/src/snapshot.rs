use crate::error::{NetworkError, Result};
use crate::network::ResonanceNetwork;
use chrono::{DateTime, Utc};
use resonance_core::{EchoMage, MageSeed, SEED_VERSION};
use serde::{Deserialize, Serialize};

pub const NETWORK_SNAPSHOT_TYPE: &str = "ResonanceNetwork";

/// Exported state of a whole network. `coherence` and `entanglements` are
/// computed at export time and ignored when the network is rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub version: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub timestamp: DateTime<Utc>,
    pub network: NetworkState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    pub mages: Vec<MageSeed>,
    #[serde(default)]
    pub coherence: f64,
    #[serde(default)]
    pub entanglements: Vec<Entanglement>,
}

/// A kin pairing by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entanglement {
    pub a: String,
    pub b: String,
    pub similarity: f64,
}

impl ResonanceNetwork {
    pub fn snapshot(&self) -> NetworkSnapshot {
        let entanglements = self
            .optimal_pairings()
            .into_iter()
            .map(|p| Entanglement {
                a: p.a.label().to_string(),
                b: p.b.label().to_string(),
                similarity: p.similarity,
            })
            .collect();

        NetworkSnapshot {
            version: SEED_VERSION.into(),
            entity_type: NETWORK_SNAPSHOT_TYPE.into(),
            timestamp: Utc::now(),
            network: NetworkState {
                mages: self.iter().map(EchoMage::to_seed).collect(),
                coherence: self.coherence(),
                entanglements,
            },
        }
    }

    pub fn from_snapshot(snapshot: &NetworkSnapshot) -> Result<Self> {
        if snapshot.entity_type != NETWORK_SNAPSHOT_TYPE {
            return Err(NetworkError::UnexpectedSnapshotType {
                expected: NETWORK_SNAPSHOT_TYPE.into(),
                found: snapshot.entity_type.clone(),
            });
        }
        snapshot
            .network
            .mages
            .iter()
            .map(|seed| EchoMage::from_seed(seed).map_err(NetworkError::from))
            .collect()
    }
}

impl NetworkSnapshot {
    pub fn to_json(&self) -> Result<String> {
        for seed in &self.network.mages {
            seed.ensure_finite()?;
        }
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
