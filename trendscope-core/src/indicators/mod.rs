//! Indicator implementations and the enriched indicator series.
//!
//! Every indicator is a pure function of the bar history: bars in, a series of
//! the same length out. Warm-up positions are `None`, never a zero or NaN
//! sentinel, so "not yet computable" can't be confused with "computed as 0".

pub mod change;
pub mod ema;
pub mod series;
pub mod sma;
pub mod volatility;

pub use change::PctChange;
pub use ema::Ema;
pub use series::{IndicatorEngine, IndicatorRow, IndicatorSeries};
pub use sma::{Sma, Source};
pub use volatility::Volatility;

use crate::domain::Bar;

/// Trait for indicators.
///
/// # Look-ahead contamination guard
/// No value at bar t may depend on bar t+1 or later. Every indicator must pass
/// the truncated-vs-full series test.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_50", "volatility_20").
    fn name(&self) -> &str;

    /// Number of leading bars that are always `None`.
    fn lookback(&self) -> usize;

    /// Compute the indicator over the whole series. Output length == `bars.len()`.
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>>;
}

/// Trailing windowed mean. A window containing a non-finite value yields `None`.
pub(crate) fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    for (i, window) in values.windows(period).enumerate() {
        if window.iter().all(|v| v.is_finite()) {
            out[i + period - 1] = Some(window.iter().sum::<f64>() / period as f64);
        }
    }
    out
}

/// Create synthetic bars from close prices for testing.
///
/// open = prev close (or close for the first bar), high/low = body ± 1.0,
/// volume = 1000.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
