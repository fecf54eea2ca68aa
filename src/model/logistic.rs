//! Trained logistic classifier loaded from a JSON coefficient artifact.

use super::ProbabilityModel;
use crate::error::EngineError;
use crate::features::FeatureVector;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_threshold() -> f64 {
    0.5
}

/// On-disk artifact: feature names in model order plus coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
    /// Advisory decision threshold from training; not used for scoring
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Logistic-regression scorer. Features are selected from the vector by the
/// names recorded in the artifact, so the model and extractor can evolve
/// independently (unknown names read as 0.0).
pub struct LogisticModel {
    feature_names: Vec<String>,
    weights: Array1<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|e| EngineError::ModelArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let artifact: LogisticArtifact =
            serde_json::from_str(&raw).map_err(|e| EngineError::ModelArtifact {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_artifact(artifact).map_err(|reason| EngineError::ModelArtifact {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_artifact(artifact: LogisticArtifact) -> Result<Self, String> {
        if artifact.feature_names.len() != artifact.weights.len() {
            return Err(format!(
                "{} feature names but {} weights",
                artifact.feature_names.len(),
                artifact.weights.len()
            ));
        }
        Ok(Self {
            feature_names: artifact.feature_names,
            weights: Array1::from_vec(artifact.weights),
            intercept: artifact.intercept,
        })
    }
}

impl ProbabilityModel for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let x = Array1::from_vec(features.select(&self.feature_names));
        let z = self.weights.dot(&x) + self.intercept;
        let p = 1.0 / (1.0 + (-z).exp());
        p.clamp(0.0, 1.0)
    }
}
