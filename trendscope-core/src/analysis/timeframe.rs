//! Per-horizon signal classification.
//!
//! Each analyser looks only at the latest enriched row and the one before it.
//! Analysers are stateless and never see anything beyond those two rows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Horizon, Signal, Strength};
use crate::indicators::IndicatorRow;

/// One moving average as seen by a horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaReading {
    /// Display name of the average, e.g. "50DMA".
    pub name: String,
    /// Display name of the price deviation, e.g. "price_vs_50dma".
    pub deviation_name: String,
    pub value: Option<f64>,
    /// (close / MA - 1) * 100.
    pub deviation_pct: Option<f64>,
}

/// Verdict for one horizon at the latest bar.
///
/// `strength` is 0 exactly when `signal` is NEUTRAL; strength 1 marks the
/// weaker of two qualifying conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeSignal {
    pub horizon: Horizon,
    pub signal: Signal,
    pub strength: Strength,
    pub readings: Vec<MaReading>,
    /// (MA / previous MA - 1) * 100. Only reported by the MA-trend horizons.
    pub ma_trend_pct: Option<f64>,
}

/// Trait for horizon analysers.
pub trait TimeframeAnalyzer: Send + Sync {
    fn horizon(&self) -> Horizon;

    /// Bars needed before this analyser can produce a non-degraded verdict.
    fn warmup_bars(&self) -> usize;

    /// Classify the latest row. `previous` is `None` for a single-bar series.
    fn evaluate(&self, latest: &IndicatorRow, previous: Option<&IndicatorRow>) -> TimeframeSignal;
}

fn deviation_pct(close: f64, ma: Option<f64>) -> Option<f64> {
    ma.map(|ma| (close / ma - 1.0) * 100.0)
}

// ── Short term ───────────────────────────────────────────────────────

/// Short SMA and short EMA, their position relative to price, and their
/// one-step momentum.
#[derive(Debug, Clone)]
pub struct ShortTermAnalyzer {
    period: usize,
}

impl ShortTermAnalyzer {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl TimeframeAnalyzer for ShortTermAnalyzer {
    fn horizon(&self) -> Horizon {
        Horizon::Short
    }

    fn warmup_bars(&self) -> usize {
        self.period + 1
    }

    fn evaluate(&self, latest: &IndicatorRow, previous: Option<&IndicatorRow>) -> TimeframeSignal {
        let close = latest.close;
        let sma = latest.sma_short;
        let ema = latest.ema_short;
        let prev_sma = previous.and_then(|p| p.sma_short);
        let prev_ema = previous.and_then(|p| p.ema_short);

        let (above, below) = match (sma, ema) {
            (Some(s), Some(e)) => (close > s && close > e, close < s && close < e),
            _ => (false, false),
        };
        let (rising, falling) = match (sma, prev_sma, ema, prev_ema) {
            (Some(s), Some(ps), Some(e), Some(pe)) => (s > ps && e > pe, s < ps && e < pe),
            _ => (false, false),
        };

        let (signal, strength) = if above && rising {
            (Signal::Buy, Strength::STRONG)
        } else if above || rising {
            (Signal::Buy, Strength::WEAK)
        } else if below && falling {
            (Signal::Sell, Strength::STRONG)
        } else if below || falling {
            (Signal::Sell, Strength::WEAK)
        } else {
            (Signal::Neutral, Strength::NONE)
        };

        debug!(horizon = %Horizon::Short, %signal, strength = strength.value(), above, below, rising, falling);

        TimeframeSignal {
            horizon: Horizon::Short,
            signal,
            strength,
            readings: vec![
                MaReading {
                    name: format!("{}DMA", self.period),
                    deviation_name: format!("price_vs_{}dma", self.period),
                    value: sma,
                    deviation_pct: deviation_pct(close, sma),
                },
                MaReading {
                    name: format!("{}DEMA", self.period),
                    deviation_name: format!("price_vs_{}ema", self.period),
                    value: ema,
                    deviation_pct: deviation_pct(close, ema),
                },
            ],
            ma_trend_pct: None,
        }
    }
}

// ── Medium / long term ───────────────────────────────────────────────

/// Single-SMA trend horizon: price position relative to the MA, MA slope, and
/// a deviation threshold separating strength 1 from strength 2.
///
/// Used twice: medium term (50-bar, ±2%) and long term (200-bar, ±5%).
#[derive(Debug, Clone)]
pub struct MovingAverageTrend {
    horizon: Horizon,
    period: usize,
    threshold: f64,
}

impl MovingAverageTrend {
    pub fn medium(period: usize, threshold: f64) -> Self {
        Self {
            horizon: Horizon::Medium,
            period,
            threshold,
        }
    }

    pub fn long(period: usize, threshold: f64) -> Self {
        Self {
            horizon: Horizon::Long,
            period,
            threshold,
        }
    }

    fn ma(&self, row: &IndicatorRow) -> Option<f64> {
        match self.horizon {
            Horizon::Long => row.sma_long,
            _ => row.sma_medium,
        }
    }

    fn reading(&self, value: Option<f64>, deviation_pct: Option<f64>) -> MaReading {
        MaReading {
            name: format!("{}DMA", self.period),
            deviation_name: format!("price_vs_{}dma", self.period),
            value,
            deviation_pct,
        }
    }

    /// NEUTRAL/0 with every metric unavailable.
    fn not_evaluable(&self) -> TimeframeSignal {
        TimeframeSignal {
            horizon: self.horizon,
            signal: Signal::Neutral,
            strength: Strength::NONE,
            readings: vec![self.reading(None, None)],
            ma_trend_pct: None,
        }
    }
}

impl TimeframeAnalyzer for MovingAverageTrend {
    fn horizon(&self) -> Horizon {
        self.horizon
    }

    fn warmup_bars(&self) -> usize {
        self.period + 1
    }

    fn evaluate(&self, latest: &IndicatorRow, previous: Option<&IndicatorRow>) -> TimeframeSignal {
        let (Some(ma), Some(prev_ma)) = (self.ma(latest), previous.and_then(|p| self.ma(p)))
        else {
            debug!(horizon = %self.horizon, needed = self.warmup_bars(), "horizon not evaluable yet");
            return self.not_evaluable();
        };

        let close = latest.close;
        let price_vs_ma = close / ma - 1.0;
        let ma_trend = ma / prev_ma - 1.0;

        let (signal, strength) = if close > ma && ma_trend > 0.0 {
            let strength = if price_vs_ma > self.threshold {
                Strength::STRONG
            } else {
                Strength::WEAK
            };
            (Signal::Buy, strength)
        } else if close > ma {
            (Signal::Buy, Strength::WEAK)
        } else if close < ma && ma_trend < 0.0 {
            let strength = if price_vs_ma < -self.threshold {
                Strength::STRONG
            } else {
                Strength::WEAK
            };
            (Signal::Sell, strength)
        } else if close < ma {
            (Signal::Sell, Strength::WEAK)
        } else {
            (Signal::Neutral, Strength::NONE)
        };

        debug!(horizon = %self.horizon, %signal, strength = strength.value(), price_vs_ma, ma_trend);

        TimeframeSignal {
            horizon: self.horizon,
            signal,
            strength,
            readings: vec![self.reading(Some(ma), Some(price_vs_ma * 100.0))],
            ma_trend_pct: Some(ma_trend * 100.0),
        }
    }
}
