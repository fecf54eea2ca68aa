//! Risk scoring: dual-window probabilities, risk factors, risk level, and
//! the intervention decision table.

mod engine;
mod intervention;

pub use engine::{RiskEngine, RiskLevel, RiskScores, Window};
pub use intervention::{
    intervention_strategy, InterventionPattern, InterventionStrategy, Urgency,
};
