//! Bar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Daily OHLCV bar for the analysed index.
///
/// Bars arrive from the data collaborator already ordered by date. Market
/// holidays are simply absent; no gap filling happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Returns true if any OHLC field is NaN or infinite.
    pub fn is_void(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite())
    }

    /// Minimal sanity check: finite prices, `high >= low`, positive close.
    /// The open is not checked against the day's range.
    pub fn is_sane(&self) -> bool {
        !self.is_void() && self.high >= self.low && self.close > 0.0
    }
}

/// Why a bar series cannot be analysed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarError {
    #[error("no bars supplied")]
    Empty,

    #[error("malformed bar at index {index} ({date}): non-finite price, high < low, or close <= 0")]
    Malformed { index: usize, date: NaiveDate },

    #[error("bar at index {index} ({date}) is not strictly after its predecessor")]
    OutOfOrder { index: usize, date: NaiveDate },
}

/// Check that a series is non-empty, every bar is sane, and dates strictly increase.
pub fn validate_series(bars: &[Bar]) -> Result<(), BarError> {
    if bars.is_empty() {
        return Err(BarError::Empty);
    }
    for (index, bar) in bars.iter().enumerate() {
        if !bar.is_sane() {
            return Err(BarError::Malformed {
                index,
                date: bar.date,
            });
        }
        if index > 0 && bar.date <= bars[index - 1].date {
            return Err(BarError::OutOfOrder {
                index,
                date: bar.date,
            });
        }
    }
    Ok(())
}
