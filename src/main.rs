//! Engine entrypoint: minimal invocation surface for the scoring core.
//! Reads an assessment request (user id + behavior summary) as JSON from a
//! file argument or stdin and prints the full assessment as JSON.

use chrono::{DateTime, Utc};
use ews_engine::{assess, BehaviorSummary, EngineConfig, EngineError, RiskEngine, StructuredLogger};
use serde::Deserialize;
use std::io::Read;
use tracing::info;

#[derive(Debug, Deserialize)]
struct AssessmentRequest {
    user_id: u64,
    #[serde(default)]
    assessment_date: Option<DateTime<Utc>>,
    behavior: BehaviorSummary,
}

fn read_request() -> Result<AssessmentRequest, EngineError> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("EWS_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = EngineConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let engine = RiskEngine::from_config(&config)?;

    let request = read_request()?;
    request.behavior.validate()?;

    let assessment_date = request.assessment_date.unwrap_or_else(Utc::now);
    let assessment = assess(&engine, request.user_id, &request.behavior, assessment_date);

    info!(
        user_id = assessment.user_id,
        risk_7day = assessment.risk_predictions.seven_day.risk_score,
        risk_30day = assessment.risk_predictions.thirty_day.risk_score,
        level = ?assessment.overall_risk_level,
        pattern = ?assessment.intervention_strategy.pattern,
        "assessment complete"
    );

    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}
