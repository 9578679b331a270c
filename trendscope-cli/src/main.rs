//! TrendScope CLI — multi-timeframe technical analysis of a daily index series.
//!
//! Commands:
//! - `analyze` — analyze daily bars from a CSV file and write the JSON report
//! - `synthetic` — analyze a seeded synthetic series (offline demo)
//! - `config` — print the default analysis config as TOML

mod export;
mod loader;

use anyhow::{Context, Result};
use chrono::{Duration, Local};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trendscope_core::domain::Bar;
use trendscope_core::{analyze, AnalysisConfig, Report};

#[derive(Parser)]
#[command(
    name = "trendscope",
    about = "TrendScope CLI — multi-timeframe technical analysis"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze daily bars from a CSV file (Date,Open,High,Low,Close,Volume).
    Analyze {
        /// Path to the CSV file, oldest bar first.
        #[arg(long)]
        bars: PathBuf,

        /// Path to a TOML analysis config. Defaults are used when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the symbol shown in the report.
        #[arg(long)]
        symbol: Option<String>,

        /// Output path for the JSON report.
        #[arg(long, default_value = "data.json")]
        output: PathBuf,

        /// Only print the one-line verdict.
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Analyze a seeded synthetic series ending today.
    Synthetic {
        /// Number of trading days to generate.
        #[arg(long, default_value_t = 300)]
        days: usize,

        /// RNG seed. Defaults to a hash of the symbol.
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML analysis config. Defaults are used when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the symbol shown in the report.
        #[arg(long)]
        symbol: Option<String>,

        /// Output path for the JSON report.
        #[arg(long, default_value = "data.json")]
        output: PathBuf,

        /// Only print the one-line verdict.
        #[arg(long, default_value_t = false)]
        quiet: bool,
    },
    /// Print the default analysis config as TOML.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            bars,
            config,
            symbol,
            output,
            quiet,
        } => {
            let config = resolve_config(config.as_deref(), symbol)?;
            let bars = loader::load_csv(&bars)?;
            run_analysis(&bars, &config, &output, quiet)
        }
        Commands::Synthetic {
            days,
            seed,
            config,
            symbol,
            output,
            quiet,
        } => {
            let config = resolve_config(config.as_deref(), symbol)?;
            let seed = seed.unwrap_or_else(|| loader::seed_from_symbol(&config.symbol));
            // Calendar span covering `days` weekdays, ending around today.
            let span = (days as i64) * 7 / 5 + 7;
            let start = Local::now().date_naive() - Duration::days(span);
            let bars = loader::generate_synthetic_bars(days, seed, start);
            info!(days, seed, %start, "generated synthetic bars");
            run_analysis(&bars, &config, &output, quiet)
        }
        Commands::Config => {
            let toml = AnalysisConfig::default()
                .to_toml()
                .context("failed to serialize default config")?;
            print!("{toml}");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(path: Option<&Path>, symbol: Option<String>) -> Result<AnalysisConfig> {
    let mut config = match path {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(symbol) = symbol {
        config.symbol = symbol;
    }
    Ok(config)
}

fn run_analysis(bars: &[Bar], config: &AnalysisConfig, output: &Path, quiet: bool) -> Result<()> {
    let report = analyze(bars, config, Local::now().naive_local())
        .context("technical analysis failed")?;

    export::write_report_json(output, &report)?;

    println!(
        "Analysis complete: {} - {}",
        report.recommendation, report.technical.overall_trend
    );
    if !quiet {
        print_summary(&report);
        println!("Report saved to: {}", output.display());
    }
    Ok(())
}

fn print_summary(report: &Report) {
    print!("{}", export::render_summary(report));
}
