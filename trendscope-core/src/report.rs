//! Report: the terminal, immutable result of one analysis run.
//!
//! This is the external form handed to renderers. Prices and percentages are
//! rounded to 2 decimals and unavailable indicators are flattened to 0 here,
//! and only here; everything upstream keeps them as `None`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::{PriceLevels, TimeframeSignal};
use crate::domain::{Horizon, Recommendation, RiskLevel, Signal, Strength, Trend};
use crate::indicators::IndicatorRow;

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn flatten(value: Option<f64>) -> f64 {
    value.map(round2).unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Supplied by the caller; the core never reads the clock.
    pub generated_at: NaiveDateTime,
    pub market: MarketSnapshot,
    pub technical: TechnicalAnalysis,
    pub support_resistance: PriceLevels,
    pub recommendation: Recommendation,
    pub risk: RiskAssessment,
    /// BLAKE3 of the input series.
    pub dataset_hash: String,
    pub bars_analyzed: usize,
}

/// Latest-bar market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub symbol: String,
    pub date: NaiveDate,
    pub current_price: f64,
    pub volume: u64,
    pub volatility: f64,
}

impl MarketSnapshot {
    pub fn from_row(symbol: &str, latest: &IndicatorRow) -> Self {
        Self {
            symbol: symbol.to_string(),
            date: latest.date,
            current_price: round2(latest.close),
            volume: latest.volume,
            volatility: flatten(latest.volatility),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub short_term: HorizonReport,
    pub medium_term: HorizonReport,
    pub long_term: HorizonReport,
    pub overall_trend: Trend,
}

impl TechnicalAnalysis {
    pub fn horizons(&self) -> [&HorizonReport; 3] {
        [&self.short_term, &self.medium_term, &self.long_term]
    }

    pub fn total_strength(&self) -> u8 {
        self.horizons().iter().map(|h| h.strength.value()).sum()
    }
}

/// Rendered view of a [`TimeframeSignal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonReport {
    pub signal: Signal,
    pub strength: Strength,
    /// e.g. `price_vs_50dma` → 3.12
    pub deviations: BTreeMap<String, f64>,
    /// MA slope in percent; absent for the short horizon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma_trend: Option<f64>,
    /// e.g. `50DMA` → 21543.10
    pub ma_values: BTreeMap<String, f64>,
}

impl HorizonReport {
    pub fn from_signal(signal: &TimeframeSignal) -> Self {
        let deviations = signal
            .readings
            .iter()
            .map(|r| (r.deviation_name.clone(), flatten(r.deviation_pct)))
            .collect();
        let ma_values = signal
            .readings
            .iter()
            .map(|r| (r.name.clone(), flatten(r.value)))
            .collect();
        let ma_trend = match signal.horizon {
            Horizon::Short => None,
            Horizon::Medium | Horizon::Long => Some(flatten(signal.ma_trend_pct)),
        };
        Self {
            signal: signal.signal,
            strength: signal.strength,
            deviations,
            ma_trend,
            ma_values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub volatility: f64,
}

impl PriceLevels {
    /// Copy with every level rounded to 2 decimals.
    pub fn rounded(&self) -> Self {
        Self {
            resistance: self.resistance.iter().copied().map(round2).collect(),
            support: self.support.iter().copied().map(round2).collect(),
        }
    }
}
