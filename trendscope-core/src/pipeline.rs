//! End-to-end analysis: bars in, [`Report`] out.
//!
//! Value-passing pipeline with no shared state. Identical inputs give
//! identical reports.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::analysis::{
    aggregate_trend, assess_risk, detect_levels, recommend, MovingAverageTrend,
    ShortTermAnalyzer, TimeframeAnalyzer,
};
use crate::config::AnalysisConfig;
use crate::domain::{validate_series, Bar};
use crate::error::AnalysisError;
use crate::fingerprint::dataset_hash;
use crate::indicators::IndicatorEngine;
use crate::report::{
    round2, HorizonReport, MarketSnapshot, Report, RiskAssessment, TechnicalAnalysis,
};

/// The short, medium and long analysers, in that order.
pub fn horizon_analyzers(config: &AnalysisConfig) -> [Box<dyn TimeframeAnalyzer>; 3] {
    let ind = &config.indicators;
    let th = &config.thresholds;
    [
        Box::new(ShortTermAnalyzer::new(ind.short_period)),
        Box::new(MovingAverageTrend::medium(ind.medium_period, th.medium_deviation)),
        Box::new(MovingAverageTrend::long(ind.long_period, th.long_deviation)),
    ]
}

/// Run the full analysis.
///
/// Fails only on empty or malformed input and invalid configuration. Short
/// history degrades the affected horizons to NEUTRAL/0 instead.
pub fn analyze(
    bars: &[Bar],
    config: &AnalysisConfig,
    generated_at: NaiveDateTime,
) -> Result<Report, AnalysisError> {
    config.validate()?;
    validate_series(bars)?;

    let series = IndicatorEngine::new(&config.indicators).compute(bars);
    let latest = series.latest().ok_or(AnalysisError::EmptyInput)?;
    let previous = series.previous();

    let [short, medium, long] =
        horizon_analyzers(config).map(|analyzer| analyzer.evaluate(latest, previous));

    let trend = aggregate_trend(&[short.signal, medium.signal, long.signal]);
    let total_strength = short.strength.value() + medium.strength.value() + long.strength.value();
    let recommendation = recommend(trend, total_strength);
    // Tiered on the rounded value the report shows.
    let risk_level = assess_risk(latest.volatility.map(round2), &config.risk);

    let levels = detect_levels(bars, &config.levels);
    debug!(
        resistance = levels.resistance.len(),
        support = levels.support.len(),
        "support/resistance scan complete"
    );

    let market = MarketSnapshot::from_row(&config.symbol, latest);
    info!(
        symbol = %config.symbol,
        date = %latest.date,
        bars = bars.len(),
        %trend,
        %recommendation,
        risk = %risk_level,
        "analysis complete"
    );

    Ok(Report {
        generated_at,
        risk: RiskAssessment {
            level: risk_level,
            volatility: market.volatility,
        },
        market,
        technical: TechnicalAnalysis {
            short_term: HorizonReport::from_signal(&short),
            medium_term: HorizonReport::from_signal(&medium),
            long_term: HorizonReport::from_signal(&long),
            overall_trend: trend,
        },
        support_resistance: levels.rounded(),
        recommendation,
        dataset_hash: dataset_hash(bars),
        bars_analyzed: bars.len(),
    })
}
