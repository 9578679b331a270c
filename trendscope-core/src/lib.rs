//! TrendScope Core — multi-timeframe technical analysis of a daily index series.
//!
//! Pipeline:
//! - Indicator engine (5/50/200 SMAs, 5 EMA, volume SMA, volatility)
//! - Short, medium and long horizon signals with strength
//! - Overall trend, graded recommendation, risk tier
//! - Support/resistance from local pivots
//! - Immutable, rounded [`report::Report`] for renderers
//!
//! The core is synchronous and performs no I/O other than reading a config
//! file when asked to.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod fingerprint;
pub mod indicators;
pub mod pipeline;
pub mod report;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, ConfigError};
pub use pipeline::analyze;
pub use report::Report;
