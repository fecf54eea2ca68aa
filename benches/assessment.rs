//! Assessment benchmark: summary → features → fallback predict.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ews_engine::config::RiskConfig;
use ews_engine::{BehaviorSummary, FallbackModel, FeatureExtractor, ProbabilityModel, RiskEngine};

fn bench_behavior() -> BehaviorSummary {
    BehaviorSummary {
        total_bets: 287,
        avg_bet_amount: 1543.25,
        total_deposits: 23,
        avg_deposit: 2500.0,
        loss_rate: 0.82,
        median_loss_gap_minutes: 2.3,
        late_night_percentage: 0.45,
        session_variance: 3.2,
        total_loss_amount: 45230.5,
        betting_days: 14,
    }
}

fn bench_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::new();
    let behavior = bench_behavior();

    c.bench_function("extract_14_features", |b| {
        b.iter(|| extractor.extract(black_box(&behavior)))
    });
}

fn bench_fallback_predict(c: &mut Criterion) {
    let features = FeatureExtractor::new().extract(&bench_behavior());
    let model = FallbackModel::new();

    c.bench_function("fallback_predict", |b| {
        b.iter(|| model.predict(black_box(&features)))
    });
}

fn bench_predict_risk(c: &mut Criterion) {
    let engine = RiskEngine::new(
        RiskConfig::default(),
        Box::new(FallbackModel::new()),
        Box::new(FallbackModel::new()),
    );
    let behavior = bench_behavior();

    c.bench_function("predict_risk_dual_window", |b| {
        b.iter(|| engine.predict_risk(black_box(&behavior)))
    });
}

criterion_group!(benches, bench_extract, bench_fallback_predict, bench_predict_risk);
criterion_main!(benches);
