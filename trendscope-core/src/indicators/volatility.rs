//! Annualized realized volatility.
//!
//! Sample standard deviation (n - 1 denominator) of the trailing `window`
//! one-period percentage changes, multiplied by sqrt(trading_days).
//! The result is in percent, e.g. 14.2 means 14.2% annualized.
//! Lookback: window (one bar is consumed by the first change).

use super::change::pct_change;
use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Volatility {
    window: usize,
    trading_days: u32,
    name: String,
}

impl Volatility {
    pub fn new(window: usize, trading_days: u32) -> Self {
        assert!(window >= 2, "volatility window must be >= 2");
        Self {
            window,
            trading_days,
            name: format!("volatility_{window}"),
        }
    }
}

impl Indicator for Volatility {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let changes = pct_change(&closes);
        let scale = f64::from(self.trading_days).sqrt();

        let mut result = vec![None; bars.len()];
        if changes.len() < self.window {
            return result;
        }
        for (i, window) in changes.windows(self.window).enumerate() {
            let values: Option<Vec<f64>> = window.iter().copied().collect();
            if let Some(values) = values {
                result[i + self.window - 1] = Some(sample_std(&values) * scale);
            }
        }
        result
    }
}

fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (n - 1.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars};

    #[test]
    fn first_value_needs_window_plus_one_bars() {
        let closes: Vec<f64> = (0..21).map(|i| 100.0 + (i % 3) as f64).collect();
        let result = Volatility::new(20, 252).compute(&make_bars(&closes));
        assert!(result[..20].iter().all(Option::is_none));
        assert!(result[20].is_some());

        let short = Volatility::new(20, 252).compute(&make_bars(&closes[..20]));
        assert!(short.iter().all(Option::is_none));
    }

    #[test]
    fn constant_growth_has_zero_volatility() {
        // Every change is exactly +10%.
        let closes: Vec<f64> = (0..4).map(|i| 100.0 * 1.1_f64.powi(i)).collect();
        let result = Volatility::new(3, 252).compute(&make_bars(&closes));
        assert_approx(result[3].unwrap(), 0.0, 1e-9);
    }

    #[test]
    fn known_sample_std() {
        // changes: +10%, -10%  -> mean 0, sample std = sqrt((100+100)/1) = 14.142...
        let result = Volatility::new(2, 1).compute(&make_bars(&[100.0, 110.0, 99.0]));
        assert_approx(result[2].unwrap(), 200.0_f64.sqrt(), 1e-9);
    }

    #[test]
    fn annualization_scales_by_sqrt_days() {
        let bars = make_bars(&[100.0, 110.0, 99.0]);
        let daily = Volatility::new(2, 1).compute(&bars)[2].unwrap();
        let annual = Volatility::new(2, 252).compute(&bars)[2].unwrap();
        assert_approx(annual, daily * 252.0_f64.sqrt(), 1e-9);
    }
}
