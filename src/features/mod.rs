//! Feature derivation from the behavior summary.

mod extractor;

pub use extractor::FeatureExtractor;

use serde::{Deserialize, Serialize};

/// Names of the 14 feature slots, in model-input order.
pub const FEATURE_NAMES: [&str; 14] = [
    "bet_count",
    "avg_bet",
    "std_bet",
    "loss_rate",
    "total_loss",
    "unique_days",
    "bets_per_day",
    "loss_gaps",
    "immediate_rebet_pct",
    "session_count",
    "session_avg_duration",
    "session_duration_cv",
    "deposit_count",
    "avg_deposit",
];

/// Fixed-order named feature vector for model input. Recomputed per
/// assessment, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), FEATURE_NAMES.len());
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a feature by name. Names outside [`FEATURE_NAMES`] read as
    /// 0.0, so a model asking for features this extractor does not compute
    /// degrades gracefully instead of failing.
    pub fn get(&self, name: &str) -> f64 {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
            .unwrap_or(0.0)
    }

    /// Assemble a model input in the order the model's artifact names its
    /// features.
    pub fn select(&self, names: &[String]) -> Vec<f64> {
        names.iter().map(|n| self.get(n)).collect()
    }
}
