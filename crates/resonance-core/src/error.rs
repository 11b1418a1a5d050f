use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResonanceError {
    #[error("malformed seed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected seed type: expected {expected}, found {found}")]
    UnexpectedSeedType { expected: String, found: String },
    #[error("mage {label} holds non-finite value {value}")]
    NonFinite { label: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, ResonanceError>;
