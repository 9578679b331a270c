//! RecommendationEngine: trend plus combined strength to a graded call.

use crate::domain::{Recommendation, Trend};

/// `total_strength` is the sum of the three horizon strengths (0..=6).
pub fn recommend(trend: Trend, total_strength: u8) -> Recommendation {
    match trend {
        Trend::Bullish if total_strength >= 5 => Recommendation::StrongBuy,
        Trend::Bullish if total_strength >= 3 => Recommendation::Buy,
        Trend::Bullish => Recommendation::WeakBuy,
        Trend::Bearish if total_strength >= 5 => Recommendation::StrongSell,
        Trend::Bearish if total_strength >= 3 => Recommendation::Sell,
        Trend::Bearish => Recommendation::WeakSell,
        Trend::Neutral => Recommendation::Hold,
    }
}
