//! Verdict vocabulary: signals, strengths, trends, recommendations, risk tiers.
//!
//! Every enum serializes to the upper-case label that appears in the rendered
//! report (`"BUY"`, `"STRONG SELL"`, `"MODERATE"`), so the JSON form needs no
//! translation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional verdict for a single horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Neutral,
}

impl Signal {
    /// Swap BUY and SELL, leaving NEUTRAL fixed.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
            Self::Neutral => Self::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confirmation count behind a signal, always in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Strength(u8);

impl Strength {
    pub const NONE: Self = Self(0);
    pub const WEAK: Self = Self(1);
    pub const STRONG: Self = Self(2);

    /// Returns `None` for values above 2.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 2).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Strength {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("strength must be 0..=2, got {value}"))
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength.0
    }
}

/// Analysis horizon, one per moving-average family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Short,
    Medium,
    Long,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Short, Horizon::Medium, Horizon::Long];
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short-term",
            Self::Medium => "medium-term",
            Self::Long => "long-term",
        })
    }
}

/// Overall market direction across all horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Bullish,
    Bearish,
    Neutral,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bullish => "BULLISH",
            Self::Bearish => "BEARISH",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Graded investment recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "WEAK BUY")]
    WeakBuy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WEAK SELL")]
    WeakSell,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "STRONG SELL")]
    StrongSell,
}

impl Recommendation {
    pub fn label(self) -> &'static str {
        match self {
            Self::StrongBuy => "STRONG BUY",
            Self::Buy => "BUY",
            Self::WeakBuy => "WEAK BUY",
            Self::Hold => "HOLD",
            Self::WeakSell => "WEAK SELL",
            Self::Sell => "SELL",
            Self::StrongSell => "STRONG SELL",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk tier derived from annualized volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_rejects_out_of_range() {
        assert_eq!(Strength::new(2), Some(Strength::STRONG));
        assert_eq!(Strength::new(3), None);
        assert!(serde_json::from_str::<Strength>("7").is_err());
    }

    #[test]
    fn strength_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Strength::WEAK).unwrap(), "1");
    }

    #[test]
    fn labels_match_serialized_form() {
        for rec in [
            Recommendation::StrongBuy,
            Recommendation::WeakSell,
            Recommendation::Hold,
        ] {
            let json = serde_json::to_string(&rec).unwrap();
            assert_eq!(json, format!("\"{}\"", rec.label()));
        }
        assert_eq!(serde_json::to_string(&Signal::Neutral).unwrap(), "\"NEUTRAL\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Moderate).unwrap(), "\"MODERATE\"");
        assert_eq!(serde_json::to_string(&Trend::Bearish).unwrap(), "\"BEARISH\"");
    }

    #[test]
    fn mirror_is_an_involution() {
        for s in [Signal::Buy, Signal::Sell, Signal::Neutral] {
            assert_eq!(s.mirrored().mirrored(), s);
        }
        assert_eq!(Signal::Neutral.mirrored(), Signal::Neutral);
    }
}
