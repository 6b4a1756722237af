//! Error types for the soil scorer
//!
//! The scoring engine itself is total over the reals and never fails; these
//! errors only come from the edges (parsing input, reading configuration and
//! files).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoilError {
    #[error("Unknown soil type '{0}' (expected Clay, Sandy, Loam, Silt, Peat or Chalky)")]
    UnknownSoilType(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
