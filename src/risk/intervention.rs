//! Intervention decision table over the dual risk scores.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterventionPattern {
    ImmediateCrisis,
    SlowBurn,
    ModerateRisk,
    Controlled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Urgent,
    Preventive,
    Monitor,
    Standard,
}

/// Recommended intervention, fully determined by the (7-day, 30-day) score
/// pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionStrategy {
    pub pattern: InterventionPattern,
    pub urgency: Urgency,
    pub description: String,
    pub actions: Vec<String>,
}

fn strategy(
    pattern: InterventionPattern,
    urgency: Urgency,
    description: &str,
    actions: &[&str],
) -> InterventionStrategy {
    InterventionStrategy {
        pattern,
        urgency,
        description: description.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// First match wins; the branch order is load-bearing. A pair like
/// (0.5, 0.9) fails the crisis branch (both must exceed 0.7) and classifies
/// as moderate via the 30-day range, while (0.75, 0.75) is a crisis before
/// the moderate ranges are ever consulted.
pub fn intervention_strategy(risk_7day: f64, risk_30day: f64) -> InterventionStrategy {
    if risk_7day > 0.7 && risk_30day > 0.7 {
        strategy(
            InterventionPattern::ImmediateCrisis,
            Urgency::Urgent,
            "Both short and long-term risk indicators show immediate danger",
            &[
                "Immediate deposit limit",
                "Mandatory cooling period",
                "Direct phone contact",
                "Emergency resources",
            ],
        )
    } else if risk_7day < 0.4 && risk_30day > 0.6 {
        strategy(
            InterventionPattern::SlowBurn,
            Urgency::Preventive,
            "Current behavior seems controlled but shows escalation trajectory",
            &[
                "Educational emails",
                "Voluntary limit suggestions",
                "Progress tracking tools",
                "Scheduled check-ins",
            ],
        )
    } else if (0.4..=0.7).contains(&risk_7day) || (0.4..=0.7).contains(&risk_30day) {
        strategy(
            InterventionPattern::ModerateRisk,
            Urgency::Monitor,
            "Showing concerning patterns that need monitoring",
            &[
                "In-app warnings",
                "Session reminders",
                "Self-assessment tools",
            ],
        )
    } else {
        strategy(
            InterventionPattern::Controlled,
            Urgency::Standard,
            "Gambling behavior appears well-controlled",
            &["Continue monitoring", "Positive reinforcement"],
        )
    }
}
