//! Behavior summary → fixed-order feature vector.

use super::FeatureVector;
use crate::behavior::BehaviorSummary;

/// Placeholder session length (minutes); session durations are not part of
/// the 14-day summary, so the model is fed a fixed value.
const SESSION_AVG_DURATION_MIN: f64 = 45.0;

/// Deterministic, total mapping from a validated [`BehaviorSummary`] to the
/// 14-slot feature vector. Stateless; one instance is shared by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, behavior: &BehaviorSummary) -> FeatureVector {
        // betting_days is the divisor for per-day rates; validated input has
        // it >= 1 already, the clamp keeps the derivation total regardless.
        let days = behavior.betting_days.max(1);

        FeatureVector::new(vec![
            f64::from(behavior.total_bets),
            behavior.avg_bet_amount,
            // proxy stand-in; no true bet-size variance in the summary
            behavior.avg_bet_amount * 0.5,
            behavior.loss_rate,
            behavior.total_loss_amount,
            f64::from(behavior.betting_days),
            f64::from(behavior.total_bets) / f64::from(days),
            behavior.median_loss_gap_minutes,
            // 1.0 at gap 0, decreasing toward 0 as the gap grows
            1.0 / (1.0 + behavior.median_loss_gap_minutes / 5.0),
            // proxy: two sessions per active day
            f64::from(behavior.betting_days) * 2.0,
            SESSION_AVG_DURATION_MIN,
            behavior.session_variance,
            f64::from(behavior.total_deposits),
            behavior.avg_deposit,
        ])
    }
}
