pub mod error;
pub mod network;
pub mod snapshot;
#[cfg(test)]
mod tests;

pub use error::{NetworkError, Result};
pub use network::{KinPairing, ResonanceNetwork, IDEAL_SIMILARITY};
pub use snapshot::{Entanglement, NetworkSnapshot, NetworkState, NETWORK_SNAPSHOT_TYPE};
