//! End-to-end pipeline scenarios.
//!
//! 1. Linear uptrend over 210 bars → all horizons BUY/2, STRONG BUY, LOW risk
//! 2. Mirror downtrend → all horizons SELL/2, STRONG SELL
//! 3. Short history → short term still evaluated, medium/long NEUTRAL with zeroed metrics
//! 4. Determinism → identical reports from identical input
//! 5. JSON form → stable field layout, upper-case labels, zeros instead of nulls

use chrono::{NaiveDate, NaiveDateTime};
use trendscope_core::domain::{Bar, Recommendation, RiskLevel, Signal, Strength, Trend};
use trendscope_core::{analyze, AnalysisConfig, Report};

// ──────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 8)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

/// Bars with high = close + 1, low = close - 1, constant volume.
fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: base + chrono::Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000_000,
        })
        .collect()
}

/// `n` closes rising linearly from `from` to `to` inclusive.
fn linear(n: usize, from: f64, to: f64) -> Vec<f64> {
    let step = (to - from) / (n - 1) as f64;
    (0..n).map(|i| from + step * i as f64).collect()
}

fn run(bars: &[Bar]) -> Report {
    analyze(bars, &AnalysisConfig::default(), generated_at()).expect("analysis should succeed")
}

// ──────────────────────────────────────────────
// Scenarios
// ──────────────────────────────────────────────

#[test]
fn linear_uptrend_is_strong_buy() {
    let bars = bars_from_closes(&linear(210, 100.0, 310.0));
    let report = run(&bars);
    let ta = &report.technical;

    for horizon in ta.horizons() {
        assert_eq!(horizon.signal, Signal::Buy);
        assert_eq!(horizon.strength, Strength::STRONG);
    }
    assert_eq!(ta.overall_trend, Trend::Bullish);
    assert_eq!(ta.total_strength(), 6);
    assert_eq!(report.recommendation, Recommendation::StrongBuy);
    assert_eq!(report.risk.level, RiskLevel::Low);
    assert!(report.risk.volatility < 1.0, "near-zero volatility, got {}", report.risk.volatility);

    assert_eq!(report.market.current_price, 310.0);
    assert_eq!(report.market.volume, 1_000_000);
    assert_eq!(report.market.date, bars.last().unwrap().date);
    assert_eq!(report.bars_analyzed, 210);

    // Every high is below the next one, so no bar strictly dominates its right
    // neighbours and no pivot can form.
    assert!(report.support_resistance.resistance.is_empty());
    assert!(report.support_resistance.support.is_empty());
}

#[test]
fn uptrend_with_late_spike_reports_resistance_near_tail() {
    let mut bars = bars_from_closes(&linear(210, 100.0, 310.0));
    bars[205].high += 10.0;
    let spike = bars[205].high;
    let report = run(&bars);

    assert_eq!(report.recommendation, Recommendation::StrongBuy);
    assert_eq!(
        report.support_resistance.resistance,
        vec![(spike * 100.0).round() / 100.0]
    );
}

#[test]
fn linear_downtrend_is_strong_sell() {
    let bars = bars_from_closes(&linear(210, 310.0, 100.0));
    let report = run(&bars);

    for horizon in report.technical.horizons() {
        assert_eq!(horizon.signal, Signal::Sell);
        assert_eq!(horizon.strength, Strength::STRONG);
    }
    assert_eq!(report.technical.overall_trend, Trend::Bearish);
    assert_eq!(report.recommendation, Recommendation::StrongSell);
}

#[test]
fn medium_history_leaves_long_term_neutral() {
    // 120 bars: 50DMA evaluable, 200DMA not.
    let report = run(&bars_from_closes(&linear(120, 100.0, 160.0)));
    let ta = &report.technical;
    assert_eq!(ta.short_term.signal, Signal::Buy);
    assert_eq!(ta.medium_term.signal, Signal::Buy);
    assert_eq!(ta.long_term.signal, Signal::Neutral);
    assert_eq!(ta.long_term.strength, Strength::NONE);
    assert_eq!(ta.long_term.ma_values["200DMA"], 0.0);
    assert_eq!(ta.overall_trend, Trend::Bullish);
    // 2 + 2 + 0
    assert_eq!(report.recommendation, Recommendation::Buy);
}

#[test]
fn exactly_long_period_bars_is_not_long_evaluable() {
    // The 200DMA exists on the last bar but not on the one before it.
    let report = run(&bars_from_closes(&linear(200, 100.0, 300.0)));
    assert_eq!(report.technical.long_term.signal, Signal::Neutral);
    assert_eq!(report.technical.long_term.ma_trend, Some(0.0));
}

#[test]
fn short_history_degrades_gracefully() {
    for n in 1..6 {
        let report = run(&bars_from_closes(&linear(n.max(2), 100.0, 105.0)[..n]));
        let ta = &report.technical;

        for horizon in [&ta.medium_term, &ta.long_term] {
            assert_eq!(horizon.signal, Signal::Neutral);
            assert_eq!(horizon.strength, Strength::NONE);
            assert!(horizon.deviations.values().all(|v| *v == 0.0));
            assert!(horizon.ma_values.values().all(|v| *v == 0.0));
            assert_eq!(horizon.ma_trend, Some(0.0));
        }
        assert_eq!(report.risk.level, RiskLevel::Low);
        assert_eq!(report.risk.volatility, 0.0);
        assert!(report.support_resistance.resistance.is_empty());
    }
}

#[test]
fn five_bars_gives_short_term_verdict() {
    // SMA exists on bar 5 only, so "rising" is unknown; price is above both averages.
    let report = run(&bars_from_closes(&[100.0, 101.0, 102.0, 103.0, 104.0]));
    assert_eq!(report.technical.short_term.signal, Signal::Buy);
    assert_eq!(report.technical.short_term.strength, Strength::WEAK);
    assert_eq!(report.technical.short_term.ma_values["5DMA"], 102.0);
}

#[test]
fn pipeline_is_deterministic() {
    let closes: Vec<f64> = (0..260)
        .map(|i| 20_000.0 + (i as f64 * 0.13).sin() * 600.0 + i as f64 * 3.0)
        .collect();
    let bars = bars_from_closes(&closes);
    let first = run(&bars);
    let second = run(&bars);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn report_json_layout() {
    let report = run(&bars_from_closes(&linear(60, 100.0, 130.0)));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["recommendation"], "BUY");
    assert_eq!(json["technical"]["overall_trend"], "BULLISH");
    assert_eq!(json["technical"]["short_term"]["signal"], "BUY");
    assert_eq!(json["technical"]["long_term"]["strength"], 0);
    assert_eq!(json["technical"]["long_term"]["ma_values"]["200DMA"], 0.0);
    assert!(json["technical"]["short_term"]["deviations"]["price_vs_5ema"].is_number());
    assert!(json["technical"]["short_term"].get("ma_trend").is_none());
    assert_eq!(json["risk"]["level"], "LOW");
    assert_eq!(json["market"]["symbol"], "NIFTY 50");
    assert_eq!(json["market"]["volume"], 1_000_000);
    assert_eq!(json["dataset_hash"].as_str().unwrap().len(), 64);

    let back: Report = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn out_of_order_bars_are_rejected() {
    let mut bars = bars_from_closes(&linear(10, 100.0, 110.0));
    bars.swap(3, 4);
    let err = analyze(&bars, &AnalysisConfig::default(), generated_at()).unwrap_err();
    assert!(err.to_string().contains("index 4"), "{err}");
}
