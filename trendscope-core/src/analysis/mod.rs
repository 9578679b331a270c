//! Decision stages applied to the enriched indicator series.
//!
//! Flow: timeframe analysers → trend aggregation → recommendation and risk.
//! Support/resistance detection runs alongside on the raw bars. Every stage
//! is a pure function of its inputs.

pub mod levels;
pub mod recommendation;
pub mod risk;
pub mod timeframe;
pub mod trend;

pub use levels::{detect_levels, PriceLevels};
pub use recommendation::recommend;
pub use risk::assess_risk;
pub use timeframe::{
    MaReading, MovingAverageTrend, ShortTermAnalyzer, TimeframeAnalyzer, TimeframeSignal,
};
pub use trend::aggregate_trend;
