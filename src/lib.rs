//! EWS Engine — Early-warning risk engine for problematic gambling behavior.
//!
//! Modular structure:
//! - [`behavior`] — 14-day behavior summary input model and boundary validation
//! - [`features`] — Behavior summary → fixed-order feature vector
//! - [`model`] — Probability models: trained logistic artifact or deterministic fallback
//! - [`risk`] — Dual-window risk scoring, risk factors, intervention decision table
//! - [`assessment`] — Full assessment bundle for callers
//! - [`logging`] — Structured JSON logging

pub mod assessment;
pub mod behavior;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod risk;

pub use assessment::{assess, RiskAssessment, RiskPrediction};
pub use behavior::BehaviorSummary;
pub use config::EngineConfig;
pub use error::EngineError;
pub use features::{FeatureExtractor, FeatureVector};
pub use logging::StructuredLogger;
pub use model::{load_or_fallback, FallbackModel, LogisticModel, ProbabilityModel};
pub use risk::{
    intervention_strategy, InterventionPattern, InterventionStrategy, RiskEngine, RiskLevel,
    RiskScores, Urgency, Window,
};
