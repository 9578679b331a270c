//! Bar loading for the CLI: CSV import and seeded synthetic series.
//!
//! This is the caller-side guard the core relies on: rows with missing prices
//! are dropped here, and the surviving series is validated before analysis.

use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};
use trendscope_core::domain::{validate_series, Bar};

/// One CSV row in the Yahoo Finance export layout. Extra columns (e.g.
/// `Adj Close`) are ignored.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(alias = "Date", alias = "DATE")]
    date: String,
    #[serde(alias = "Open", alias = "OPEN")]
    open: String,
    #[serde(alias = "High", alias = "HIGH")]
    high: String,
    #[serde(alias = "Low", alias = "LOW")]
    low: String,
    #[serde(alias = "Close", alias = "CLOSE")]
    close: String,
    #[serde(default, alias = "Volume", alias = "VOLUME")]
    volume: Option<String>,
}

impl CsvRow {
    /// `Ok(None)` for rows the provider left blank ("null" or empty prices).
    fn into_bar(self) -> Result<Option<Bar>> {
        let date = parse_date(&self.date)?;
        let prices = [&self.open, &self.high, &self.low, &self.close].map(|s| parse_price(s));
        let [Some(open), Some(high), Some(low), Some(close)] = prices else {
            return Ok(None);
        };
        let volume = self
            .volume
            .as_deref()
            .and_then(parse_price)
            .filter(|v| *v >= 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(0);
        Ok(Some(Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        }))
    }
}

/// Accepts `YYYY-MM-DD` optionally followed by a time part.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    let day = raw.trim().get(..10).unwrap_or(raw.trim());
    NaiveDate::parse_from_str(day, "%Y-%m-%d").with_context(|| format!("invalid date '{raw}'"))
}

fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Load and validate bars from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Vec<Bar>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open bars file {}", path.display()))?;

    let mut bars = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in reader.deserialize::<CsvRow>().enumerate() {
        // +2: header line, 1-based numbering
        let row = row.with_context(|| format!("{}: bad row at line {}", path.display(), line + 2))?;
        match row
            .into_bar()
            .with_context(|| format!("{}: line {}", path.display(), line + 2))?
        {
            Some(bar) => bars.push(bar),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, file = %path.display(), "dropped rows with missing prices");
    }
    if bars.is_empty() {
        bail!("no usable bars in {}", path.display());
    }
    validate_series(&bars).with_context(|| format!("invalid bar series in {}", path.display()))?;

    info!(
        bars = bars.len(),
        first = %bars[0].date,
        last = %bars[bars.len() - 1].date,
        "loaded bars"
    );
    Ok(bars)
}

/// Seeded random walk over `days` weekdays starting at `start`.
///
/// Developer fallback only; the same seed always yields the same series.
pub fn generate_synthetic_bars(days: usize, seed: u64, start: NaiveDate) -> Vec<Bar> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let mut bars = Vec::with_capacity(days);
    let mut price = 20_000.0_f64;
    let mut current = start;

    while bars.len() < days {
        let weekday = current.weekday();
        if weekday == chrono::Weekday::Sat || weekday == chrono::Weekday::Sun {
            current += chrono::Duration::days(1);
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.02..0.02);
        let open = price;
        let close = price * (1.0 + daily_return);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.008));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.008));
        let volume = rng.gen_range(150_000..900_000u64);

        bars.push(Bar {
            date: current,
            open,
            high,
            low,
            close,
            volume,
        });

        price = close;
        current += chrono::Duration::days(1);
    }

    bars
}

/// Default synthetic seed derived from the symbol name.
pub fn seed_from_symbol(symbol: &str) -> u64 {
    let hash = blake3::hash(symbol.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_yahoo_layout() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Adj Close,Volume\n\
             2024-01-01,21727.75,21834.35,21680.85,21741.90,21741.90,154000\n\
             2024-01-02,21751.35,21755.60,21555.65,21665.80,21665.80,269900\n",
        );
        let bars = load_csv(file.path()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(bars[1].close, 21665.80);
        assert_eq!(bars[1].volume, 269_900);
    }

    #[test]
    fn lowercase_headers_and_timestamps() {
        let file = write_csv(
            "date,open,high,low,close,volume\n\
             2024-01-01 00:00:00+05:30,10,12,9,11,100.0\n",
        );
        let bars = load_csv(file.path()).unwrap();
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(bars[0].volume, 100);
    }

    #[test]
    fn null_rows_are_dropped_and_blank_volume_is_zero() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-01,10,12,9,11,\n\
             2024-01-02,null,null,null,null,null\n\
             2024-01-03,11,13,10,12,500\n",
        );
        let bars = load_csv(file.path()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].volume, 0);
    }

    #[test]
    fn out_of_order_file_is_rejected() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-03,10,12,9,11,1\n\
             2024-01-02,10,12,9,11,1\n",
        );
        let err = load_csv(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("not strictly after"), "{err:#}");
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = write_csv("Date,Open,High,Low,Close,Volume\n");
        assert!(load_csv(file.path()).is_err());
    }

    #[test]
    fn bad_date_reports_line() {
        let file = write_csv("Date,Open,High,Low,Close,Volume\n01/02/2024,1,2,0.5,1,1\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn synthetic_is_seeded_and_weekday_only() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = generate_synthetic_bars(250, 7, start);
        let b = generate_synthetic_bars(250, 7, start);
        assert_eq!(a, b);
        assert_eq!(a.len(), 250);
        assert!(a.iter().all(|bar| bar.is_sane()));
        assert!(a
            .iter()
            .all(|bar| !matches!(bar.date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)));
        validate_series(&a).unwrap();

        let c = generate_synthetic_bars(250, 8, start);
        assert_ne!(a, c);
    }

    #[test]
    fn symbol_seed_is_stable() {
        assert_eq!(seed_from_symbol("NIFTY 50"), seed_from_symbol("NIFTY 50"));
        assert_ne!(seed_from_symbol("NIFTY 50"), seed_from_symbol("NIFTY BANK"));
    }
}
