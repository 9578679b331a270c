//! One-period percentage price change.
//!
//! CHANGE[t] = (close[t] - close[t-1]) / close[t-1] * 100
//! Lookback: 1.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone, Default)]
pub struct PctChange;

impl PctChange {
    pub fn new() -> Self {
        Self
    }
}

impl Indicator for PctChange {
    fn name(&self) -> &str {
        "pct_change_1"
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        pct_change(&closes)
    }
}

pub(crate) fn pct_change(values: &[f64]) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    for i in 1..values.len() {
        let (prev, curr) = (values[i - 1], values[i]);
        if prev.is_finite() && curr.is_finite() && prev != 0.0 {
            result[i] = Some((curr - prev) / prev * 100.0);
        }
    }
    result
}
