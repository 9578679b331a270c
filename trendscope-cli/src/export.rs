//! Report export (JSON) and the terminal summary.

use anyhow::{Context, Result};
use std::path::Path;
use trendscope_core::report::HorizonReport;
use trendscope_core::Report;

/// Write the report as pretty JSON, creating parent directories as needed.
pub fn write_report_json(path: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report {}", path.display()))?;
    Ok(())
}

fn format_horizon(name: &str, h: &HorizonReport) -> String {
    let mut line = format!("{name:<14}{:<8} strength {}", h.signal.label(), h.strength.value());
    for (label, value) in &h.deviations {
        line.push_str(&format!("  {label} {value:+.2}%"));
    }
    if let Some(trend) = h.ma_trend {
        line.push_str(&format!("  ma_trend {trend:+.2}%"));
    }
    line
}

fn format_levels(levels: &[f64]) -> String {
    if levels.is_empty() {
        return "-".to_string();
    }
    levels
        .iter()
        .map(|l| format!("{l:.2}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable multi-line summary.
pub fn render_summary(report: &Report) -> String {
    let ta = &report.technical;
    let mut out = String::new();
    out.push_str("\n=== Technical Analysis ===\n");
    out.push_str(&format!("Symbol:        {}\n", report.market.symbol));
    out.push_str(&format!("Date:          {}\n", report.market.date));
    out.push_str(&format!("Close:         {:.2}\n", report.market.current_price));
    out.push_str(&format!("Volume:        {}\n", report.market.volume));
    out.push_str(&format!("Bars:          {}\n", report.bars_analyzed));
    out.push_str("\n--- Signals ---\n");
    out.push_str(&format_horizon("Short term", &ta.short_term));
    out.push('\n');
    out.push_str(&format_horizon("Medium term", &ta.medium_term));
    out.push('\n');
    out.push_str(&format_horizon("Long term", &ta.long_term));
    out.push('\n');
    out.push_str(&format!("Overall:       {}\n", ta.overall_trend));
    out.push_str("\n--- Levels ---\n");
    out.push_str(&format!(
        "Resistance:    {}\n",
        format_levels(&report.support_resistance.resistance)
    ));
    out.push_str(&format!(
        "Support:       {}\n",
        format_levels(&report.support_resistance.support)
    ));
    out.push_str("\n--- Verdict ---\n");
    out.push_str(&format!("Recommendation: {}\n", report.recommendation));
    out.push_str(&format!(
        "Risk:           {} (volatility {:.2}%)\n",
        report.risk.level, report.risk.volatility
    ));
    out
}
