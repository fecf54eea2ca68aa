//! Dual-window risk scoring and risk-factor derivation.

use crate::behavior::BehaviorSummary;
use crate::config::{EngineConfig, RiskConfig};
use crate::error::EngineError;
use crate::features::FeatureExtractor;
use crate::model::{load_or_fallback, ProbabilityModel};
use serde::{Deserialize, Serialize};

/// Prediction horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "7_day")]
    SevenDay,
    #[serde(rename = "30_day")]
    ThirtyDay,
}

impl Window {
    pub fn label(self) -> &'static str {
        match self {
            Window::SevenDay => "7_day",
            Window::ThirtyDay => "30_day",
        }
    }

    pub fn days(self) -> u32 {
        match self {
            Window::SevenDay => 7,
            Window::ThirtyDay => 30,
        }
    }
}

/// Escalation probabilities per prediction window, produced once per
/// assessment and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    #[serde(rename = "7_day")]
    pub seven_day: f64,
    #[serde(rename = "30_day")]
    pub thirty_day: f64,
}

impl RiskScores {
    pub fn get(&self, window: Window) -> f64 {
        match window {
            Window::SevenDay => self.seven_day,
            Window::ThirtyDay => self.thirty_day,
        }
    }

    pub fn max(&self) -> f64 {
        self.seven_day.max(self.thirty_day)
    }
}

/// Overall risk classification. `Critical` belongs to the reporting
/// vocabulary (aggregate dashboards) and is never produced by
/// [`RiskLevel::from_scores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify from the higher of the two window scores. Both comparisons
    /// are strict: a score exactly on a threshold takes the lower level.
    pub fn from_scores(scores: &RiskScores, config: &RiskConfig) -> Self {
        let max_score = scores.max();
        if max_score > config.high_threshold {
            RiskLevel::High
        } else if max_score > config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Risk-factor rules, evaluated against the raw summary in fixed order.
/// A summary may trigger none, some, or all of them.
fn risk_factors(behavior: &BehaviorSummary) -> Vec<String> {
    let mut factors = Vec::new();
    if behavior.median_loss_gap_minutes < 5.0 {
        factors.push("Immediate loss chasing behavior".to_string());
    }
    if behavior.total_deposits > 20 {
        factors.push("High deposit frequency".to_string());
    }
    if behavior.late_night_percentage > 0.4 {
        factors.push("Excessive late-night gambling".to_string());
    }
    if behavior.session_variance > 2.0 {
        factors.push("Erratic session patterns".to_string());
    }
    if behavior.loss_rate > 0.8 {
        factors.push("Very high loss rate".to_string());
    }
    factors
}

/// Scoring core: one probability model per window plus the rule sets.
/// Constructed once at startup and read-only per call; safe to share across
/// threads without locking.
pub struct RiskEngine {
    config: RiskConfig,
    extractor: FeatureExtractor,
    seven_day: Box<dyn ProbabilityModel>,
    thirty_day: Box<dyn ProbabilityModel>,
}

impl RiskEngine {
    pub fn new(
        config: RiskConfig,
        seven_day: Box<dyn ProbabilityModel>,
        thirty_day: Box<dyn ProbabilityModel>,
    ) -> Self {
        Self {
            config,
            extractor: FeatureExtractor::new(),
            seven_day,
            thirty_day,
        }
    }

    /// Build the engine from configuration, loading the trained artifact for
    /// each window or degrading to the deterministic fallback.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let seven_day = load_or_fallback(&config.models.seven_day_path, Window::SevenDay)?;
        let thirty_day = load_or_fallback(&config.models.thirty_day_path, Window::ThirtyDay)?;
        Ok(Self::new(config.risk.clone(), seven_day, thirty_day))
    }

    /// Score both windows from a single feature extraction and derive the
    /// triggered risk factors. Never fails for validated input.
    pub fn predict_risk(&self, behavior: &BehaviorSummary) -> (RiskScores, Vec<String>) {
        let features = self.extractor.extract(behavior);
        let scores = RiskScores {
            seven_day: self.seven_day.predict(&features),
            thirty_day: self.thirty_day.predict(&features),
        };
        (scores, risk_factors(behavior))
    }

    pub fn risk_level(&self, scores: &RiskScores) -> RiskLevel {
        RiskLevel::from_scores(scores, &self.config)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
