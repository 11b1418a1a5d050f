use resonance_core::ResonanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no mage labelled {0} in the network")]
    UnknownMage(String),
    #[error("unexpected snapshot type: expected {expected}, found {found}")]
    UnexpectedSnapshotType { expected: String, found: String },
    #[error(transparent)]
    Resonance(#[from] ResonanceError),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
