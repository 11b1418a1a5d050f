pub mod error;
pub mod intent;
pub mod mage;
pub mod seed;
pub mod thresholds;

pub use error::{ResonanceError, Result};
pub use intent::IntentVector;
pub use mage::{EchoMage, ResonanceReading};
pub use seed::{DerivedIntent, MagePayload, MageSeed, MAGE_SEED_TYPE, SEED_VERSION};
pub use thresholds::{ActivationState, KinThresholds, Relationship};
