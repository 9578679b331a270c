//! TrendAggregator: majority vote across horizons.

use crate::domain::{Signal, Trend};

/// Two or more BUY votes is BULLISH, two or more SELL is BEARISH, anything
/// else (including a BUY/SELL/NEUTRAL split) is NEUTRAL.
pub fn aggregate_trend(signals: &[Signal]) -> Trend {
    let buys = signals.iter().filter(|s| **s == Signal::Buy).count();
    let sells = signals.iter().filter(|s| **s == Signal::Sell).count();

    if buys >= 2 {
        Trend::Bullish
    } else if sells >= 2 {
        Trend::Bearish
    } else {
        Trend::Neutral
    }
}
