//! Serializable analysis configuration.
//!
//! Every section is `#[serde(default)]`, so a TOML file only needs to name the
//! values it overrides. The defaults are the classic 5/50/200 setup.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Complete configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Display name of the analysed index.
    pub symbol: String,
    pub indicators: IndicatorSettings,
    pub thresholds: SignalThresholds,
    pub levels: LevelSettings,
    pub risk: RiskThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            symbol: "NIFTY 50".to_string(),
            indicators: IndicatorSettings::default(),
            thresholds: SignalThresholds::default(),
            levels: LevelSettings::default(),
            risk: RiskThresholds::default(),
        }
    }
}

/// Indicator windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// Window of the short SMA and the short EMA span.
    pub short_period: usize,
    pub medium_period: usize,
    pub long_period: usize,
    pub volume_period: usize,
    /// Number of trailing percentage changes in the volatility estimate.
    pub volatility_window: usize,
    /// Annualization factor for volatility.
    pub trading_days: u32,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            short_period: 5,
            medium_period: 50,
            long_period: 200,
            volume_period: 20,
            volatility_window: 20,
            trading_days: 252,
        }
    }
}

/// Minimum distance of price from its MA (as a fraction) for a strength-2 verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    pub medium_deviation: f64,
    pub long_deviation: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            medium_deviation: 0.02,
            long_deviation: 0.05,
        }
    }
}

/// Pivot scan settings for support/resistance detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSettings {
    /// Number of most recent bars scanned.
    pub lookback: usize,
    /// Bars on each side a pivot must dominate.
    pub pivot_radius: usize,
    /// Levels kept per side.
    pub max_levels: usize,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            lookback: 50,
            pivot_radius: 2,
            max_levels: 3,
        }
    }
}

/// Volatility cut-offs (annualized percent) for the risk tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Strictly above this is HIGH.
    pub high_above: f64,
    /// Strictly above this (and not HIGH) is MODERATE.
    pub moderate_above: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_above: 30.0,
            moderate_above: 20.0,
        }
    }
}

impl AnalysisConfig {
    /// Read, parse and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML (used by `trendscope config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ind = &self.indicators;
        if ind.short_period == 0 || ind.volume_period == 0 {
            return Err(invalid("indicator periods must be >= 1"));
        }
        if !(ind.short_period < ind.medium_period && ind.medium_period < ind.long_period) {
            return Err(invalid(format!(
                "periods must strictly increase: short={} medium={} long={}",
                ind.short_period, ind.medium_period, ind.long_period
            )));
        }
        if ind.volatility_window < 2 {
            return Err(invalid("volatility_window must be >= 2"));
        }
        if ind.trading_days == 0 {
            return Err(invalid("trading_days must be >= 1"));
        }

        let th = &self.thresholds;
        if !(th.medium_deviation > 0.0 && th.long_deviation > 0.0) {
            return Err(invalid("deviation thresholds must be positive"));
        }

        let lv = &self.levels;
        if lv.max_levels == 0 {
            return Err(invalid("max_levels must be >= 1"));
        }
        if lv.pivot_radius == 0 || lv.lookback < 2 * lv.pivot_radius + 1 {
            return Err(invalid(format!(
                "lookback {} too short for pivot_radius {}",
                lv.lookback, lv.pivot_radius
            )));
        }

        let risk = &self.risk;
        if !(risk.moderate_above.is_finite() && risk.high_above.is_finite()) {
            return Err(invalid("risk thresholds must be finite"));
        }
        if risk.moderate_above > risk.high_above {
            return Err(invalid(format!(
                "moderate_above ({}) exceeds high_above ({})",
                risk.moderate_above, risk.high_above
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
