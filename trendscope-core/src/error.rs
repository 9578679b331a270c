//! Structured error types for the analysis core.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::BarError;

/// Why an analysis run could not produce a report.
///
/// Short history is not an error: unavailable indicators degrade the affected
/// horizon to NEUTRAL/0 and the report is still produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot analyse an empty bar series")]
    EmptyInput,

    #[error("malformed bar at index {index} ({date}); reject it before analysis")]
    MalformedBar { index: usize, date: NaiveDate },

    #[error("bars out of order at index {index} ({date}); dates must strictly increase")]
    OutOfOrder { index: usize, date: NaiveDate },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl From<BarError> for AnalysisError {
    fn from(err: BarError) -> Self {
        match err {
            BarError::Empty => Self::EmptyInput,
            BarError::Malformed { index, date } => Self::MalformedBar { index, date },
            BarError::OutOfOrder { index, date } => Self::OutOfOrder { index, date },
        }
    }
}

/// Errors loading or validating an [`AnalysisConfig`](crate::config::AnalysisConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{0}")]
    Invalid(String),
}
