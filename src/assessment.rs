//! Full assessment bundle: per-window predictions, overall level, factors,
//! and the recommended intervention, assembled from one engine pass.

use crate::behavior::BehaviorSummary;
use crate::risk::{
    intervention_strategy, InterventionStrategy, RiskEngine, RiskLevel, RiskScores, Window,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MODEL_VERSION: &str = "1.0.0";
const ASSESSMENT_TYPE: &str = "new_user_14_day";
/// Assessments run on day 14 of a new account
const ACCOUNT_AGE_DAYS: u32 = 14;

const SEVEN_DAY_CONFIDENCE: f64 = 0.85;
const THIRTY_DAY_CONFIDENCE: f64 = 0.75;

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Single-window prediction as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub window_days: u32,
    /// Risk probability 0-1, rounded to 3 decimals
    pub risk_score: f64,
    pub confidence: f64,
    /// Likely escalation behaviors for this window
    pub predicted_behaviors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPredictions {
    #[serde(rename = "7_day")]
    pub seven_day: RiskPrediction,
    #[serde(rename = "30_day")]
    pub thirty_day: RiskPrediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetadata {
    pub model_version: String,
    pub assessment_type: String,
}

/// Complete risk assessment for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub assessment_id: Uuid,
    pub user_id: u64,
    pub account_age_days: u32,
    pub assessment_date: DateTime<Utc>,
    pub behavior_summary: BehaviorSummary,
    pub risk_predictions: RiskPredictions,
    pub overall_risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub intervention_strategy: InterventionStrategy,
    pub metadata: AssessmentMetadata,
}

fn predictions(scores: &RiskScores) -> RiskPredictions {
    let seven_behaviors = if scores.seven_day > 0.5 {
        vec!["Frequency increase likely".to_string()]
    } else {
        Vec::new()
    };
    let thirty_behaviors = if scores.thirty_day > 0.6 {
        vec!["Potential loss spiral".to_string()]
    } else {
        Vec::new()
    };
    RiskPredictions {
        seven_day: RiskPrediction {
            window_days: Window::SevenDay.days(),
            risk_score: round3(scores.seven_day),
            confidence: SEVEN_DAY_CONFIDENCE,
            predicted_behaviors: seven_behaviors,
        },
        thirty_day: RiskPrediction {
            window_days: Window::ThirtyDay.days(),
            risk_score: round3(scores.thirty_day),
            confidence: THIRTY_DAY_CONFIDENCE,
            predicted_behaviors: thirty_behaviors,
        },
    }
}

/// Run one full assessment. The engine is read-only; this is a pure function
/// of its inputs apart from the freshly minted assessment id.
pub fn assess(
    engine: &RiskEngine,
    user_id: u64,
    behavior: &BehaviorSummary,
    assessment_date: DateTime<Utc>,
) -> RiskAssessment {
    let (scores, risk_factors) = engine.predict_risk(behavior);
    let overall_risk_level = engine.risk_level(&scores);
    let strategy = intervention_strategy(scores.seven_day, scores.thirty_day);

    RiskAssessment {
        assessment_id: Uuid::new_v4(),
        user_id,
        account_age_days: ACCOUNT_AGE_DAYS,
        assessment_date,
        behavior_summary: behavior.clone(),
        risk_predictions: predictions(&scores),
        overall_risk_level,
        risk_factors,
        intervention_strategy: strategy,
        metadata: AssessmentMetadata {
            model_version: MODEL_VERSION.to_string(),
            assessment_type: ASSESSMENT_TYPE.to_string(),
        },
    }
}
