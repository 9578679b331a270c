//! Domain types for TrendScope

pub mod bar;
pub mod signal;

pub use bar::{validate_series, Bar, BarError};
pub use signal::{Horizon, Recommendation, RiskLevel, Signal, Strength, Trend};
