//! Probability models: trained logistic artifact or deterministic fallback.

mod fallback;
mod logistic;

pub use fallback::FallbackModel;
pub use logistic::{LogisticArtifact, LogisticModel};

use crate::error::EngineError;
use crate::features::FeatureVector;
use crate::risk::Window;
use std::path::Path;

/// One probability model per prediction window: feature vector in,
/// probability in [0, 1] out. Instances are built once at startup and are
/// read-only afterwards, so concurrent callers need no synchronization.
pub trait ProbabilityModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> f64;
}

/// Load the trained artifact for `window`, degrading to the deterministic
/// fallback when the file is absent. An artifact that exists but cannot be
/// read or parsed is an error, not a silent downgrade.
pub fn load_or_fallback(
    path: &Path,
    window: Window,
) -> Result<Box<dyn ProbabilityModel>, EngineError> {
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            window = window.label(),
            "model artifact not found; using deterministic fallback"
        );
        return Ok(Box::new(FallbackModel::new()));
    }
    let model = LogisticModel::load(path)?;
    Ok(Box::new(model))
}
