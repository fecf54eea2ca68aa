//! Deterministic pseudo-random stand-in used when no trained artifact exists.

use super::ProbabilityModel;
use crate::features::FeatureVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

/// Pure function of the feature vector's content: the same vector always
/// scores the same probability, so callers cannot tell this variant from a
/// trained model by its threading or retry behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackModel;

impl FallbackModel {
    pub fn new() -> Self {
        Self
    }

    fn seed(features: &FeatureVector) -> u64 {
        let mut hasher = Sha256::new();
        for v in features.values() {
            hasher.update(v.to_le_bytes());
        }
        let digest = hasher.finalize();
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(seed)
    }
}

impl ProbabilityModel for FallbackModel {
    fn predict(&self, features: &FeatureVector) -> f64 {
        let mut rng = StdRng::seed_from_u64(Self::seed(features));
        // mean of two uniforms: symmetric triangular on [0, 1], centered at
        // 0.5 like the training-time score distribution
        (rng.gen::<f64>() + rng.gen::<f64>()) / 2.0
    }
}
