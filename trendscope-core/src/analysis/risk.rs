//! RiskAssessor: annualized volatility to a risk tier.

use crate::config::RiskThresholds;
use crate::domain::RiskLevel;

/// Missing volatility counts as 0 so a tier is always available for display.
pub fn assess_risk(volatility: Option<f64>, thresholds: &RiskThresholds) -> RiskLevel {
    let vol = volatility.unwrap_or(0.0);
    if vol > thresholds.high_above {
        RiskLevel::High
    } else if vol > thresholds.moderate_above {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
