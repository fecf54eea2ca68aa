//! Error types for the early-warning engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers. Scoring itself has no fault paths; everything
/// here belongs to the boundary (input validation) or to model loading.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("model artifact {path}: {reason}")]
    ModelArtifact { path: PathBuf, reason: String },

    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: f64 },

    #[error("betting_days must be at least 1")]
    NoBettingDays,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
