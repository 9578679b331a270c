//! SupportResistanceDetector: local pivot highs and lows over recent bars.

use serde::{Deserialize, Serialize};

use crate::config::LevelSettings;
use crate::domain::Bar;

/// Ranked price levels. Either side may be empty when no pivot qualifies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    /// Highest first.
    pub resistance: Vec<f64>,
    /// Ascending; the tail of the sorted pivots, i.e. the highest supports.
    pub support: Vec<f64>,
}

/// Scan the last `lookback` bars for pivots.
///
/// A bar at window index `i` is a candidate only if `pivot_radius` bars exist
/// on both sides inside the window. Its high is a resistance pivot when it
/// strictly exceeds every neighbouring high; its low is a support pivot when
/// it is strictly below every neighbouring low.
pub fn detect_levels(bars: &[Bar], settings: &LevelSettings) -> PriceLevels {
    let window = &bars[bars.len().saturating_sub(settings.lookback)..];
    let r = settings.pivot_radius;

    let mut resistance = Vec::new();
    let mut support = Vec::new();

    for i in r..window.len().saturating_sub(r) {
        let neighbours = window[i - r..i].iter().chain(&window[i + 1..=i + r]);
        let (max_high, min_low) = neighbours.fold(
            (f64::NEG_INFINITY, f64::INFINITY),
            |(hi, lo), bar| (hi.max(bar.high), lo.min(bar.low)),
        );

        if window[i].high > max_high {
            resistance.push(window[i].high);
        }
        if window[i].low < min_low {
            support.push(window[i].low);
        }
    }

    resistance.sort_by(|a, b| b.total_cmp(a));
    resistance.dedup();
    resistance.truncate(settings.max_levels);

    support.sort_by(|a, b| a.total_cmp(b));
    support.dedup();
    let keep_from = support.len().saturating_sub(settings.max_levels);
    support.drain(..keep_from);

    PriceLevels {
        resistance,
        support,
    }
}
