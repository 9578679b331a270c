//! Simple Moving Average (SMA).
//!
//! Trailing mean over a fixed window of closes (or volumes).
//! Lookback: period - 1 (first value at index period-1).

use super::{rolling_mean, Indicator};
use crate::domain::Bar;

/// Which bar field the average is taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Close,
    Volume,
}

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    source: Source,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            source: Source::Close,
            name: format!("sma_{period}"),
        }
    }

    pub fn of_volume(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self {
            period,
            source: Source::Volume,
            name: format!("volume_sma_{period}"),
        }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let values: Vec<f64> = match self.source {
            Source::Close => bars.iter().map(|b| b.close).collect(),
            Source::Volume => bars.iter().map(|b| b.volume as f64).collect(),
        };
        rolling_mean(&values, self.period)
    }
}
