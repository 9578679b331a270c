//! IndicatorEngine: enriches a bar series with every derived field the
//! analysers read, aligned 1:1 with the input bars.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::{Ema, Indicator, PctChange, Sma, Volatility};
use crate::config::IndicatorSettings;
use crate::domain::Bar;

/// One enriched bar. Windowed fields are `None` until their window is full.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRow {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub sma_short: Option<f64>,
    pub ema_short: Option<f64>,
    pub sma_medium: Option<f64>,
    pub sma_long: Option<f64>,
    pub volume_sma: Option<f64>,
    /// One-period change in percent.
    pub price_change: Option<f64>,
    /// Annualized volatility in percent.
    pub volatility: Option<f64>,
}

/// Enriched series, same length and order as the bars it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSeries {
    rows: Vec<IndicatorRow>,
}

impl IndicatorSeries {
    pub fn rows(&self) -> &[IndicatorRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// The row immediately before the latest, if any.
    pub fn previous(&self) -> Option<&IndicatorRow> {
        self.rows.len().checked_sub(2).map(|i| &self.rows[i])
    }
}

/// Holds the configured indicator instances; `compute` is pure.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    sma_short: Sma,
    ema_short: Ema,
    sma_medium: Sma,
    sma_long: Sma,
    volume_sma: Sma,
    price_change: PctChange,
    volatility: Volatility,
}

impl IndicatorEngine {
    pub fn new(settings: &IndicatorSettings) -> Self {
        Self {
            sma_short: Sma::new(settings.short_period),
            ema_short: Ema::new(settings.short_period),
            sma_medium: Sma::new(settings.medium_period),
            sma_long: Sma::new(settings.long_period),
            volume_sma: Sma::of_volume(settings.volume_period),
            price_change: PctChange::new(),
            volatility: Volatility::new(settings.volatility_window, settings.trading_days),
        }
    }

    /// Never fails: short input just leaves the long-window fields `None`.
    pub fn compute(&self, bars: &[Bar]) -> IndicatorSeries {
        let sma_short = self.sma_short.compute(bars);
        let ema_short = self.ema_short.compute(bars);
        let sma_medium = self.sma_medium.compute(bars);
        let sma_long = self.sma_long.compute(bars);
        let volume_sma = self.volume_sma.compute(bars);
        let price_change = self.price_change.compute(bars);
        let volatility = self.volatility.compute(bars);

        for indicator in self.indicators() {
            if bars.len() <= indicator.lookback() {
                debug!(
                    indicator = indicator.name(),
                    bars = bars.len(),
                    needed = indicator.lookback() + 1,
                    "not enough history, indicator unavailable"
                );
            }
        }

        let rows = bars
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                date: bar.date,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                sma_short: sma_short[i],
                ema_short: ema_short[i],
                sma_medium: sma_medium[i],
                sma_long: sma_long[i],
                volume_sma: volume_sma[i],
                price_change: price_change[i],
                volatility: volatility[i],
            })
            .collect();

        IndicatorSeries { rows }
    }

    fn indicators(&self) -> [&dyn Indicator; 7] {
        [
            &self.sma_short,
            &self.ema_short,
            &self.sma_medium,
            &self.sma_long,
            &self.volume_sma,
            &self.price_change,
            &self.volatility,
        ]
    }
}
