//! 14-day behavior summary: the engine's sole input.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Summary of a user's first 14 days of betting activity. Immutable input to
/// every assessment; validated once at the boundary, never re-validated by
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSummary {
    /// Total number of bets in the window
    pub total_bets: u32,
    /// Average bet amount in $
    pub avg_bet_amount: f64,
    /// Number of deposits made
    pub total_deposits: u32,
    /// Average deposit amount in $
    pub avg_deposit: f64,
    /// Fraction of bets lost, 0..=1
    pub loss_rate: f64,
    /// Median minutes between a loss and the next bet
    pub median_loss_gap_minutes: f64,
    /// Fraction of gambling taking place late at night, 0..=1
    pub late_night_percentage: f64,
    /// Coefficient of variation of session durations
    pub session_variance: f64,
    /// Total amount lost in $
    pub total_loss_amount: f64,
    /// Days with betting activity; divisor for per-day rates, must be >= 1
    pub betting_days: u32,
}

fn unit_range(field: &'static str, value: f64) -> Result<(), EngineError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::FieldOutOfRange { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
    // NaN fails the comparison and is rejected along with negatives
    if value >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::FieldOutOfRange { field, value })
    }
}

impl BehaviorSummary {
    /// Boundary validation. Callers run this before handing the summary to
    /// the engine; the scoring path assumes it has passed.
    pub fn validate(&self) -> Result<(), EngineError> {
        unit_range("loss_rate", self.loss_rate)?;
        unit_range("late_night_percentage", self.late_night_percentage)?;
        non_negative("avg_bet_amount", self.avg_bet_amount)?;
        non_negative("avg_deposit", self.avg_deposit)?;
        non_negative("median_loss_gap_minutes", self.median_loss_gap_minutes)?;
        non_negative("session_variance", self.session_variance)?;
        non_negative("total_loss_amount", self.total_loss_amount)?;
        if self.betting_days == 0 {
            return Err(EngineError::NoBettingDays);
        }
        Ok(())
    }
}
