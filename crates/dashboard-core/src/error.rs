// File: crates/dashboard-core/src/error.rs
// Summary: Error kinds for the dashboard core. None of them are fatal; state is left in its last valid configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown indicator key: {0}")]
    UnknownIndicatorKey(String),
    #[error("unknown subplot group: {0}")]
    UnknownGroup(String),
    #[error("prediction data mismatch: {dates} dates vs {values} values")]
    PredictionDataMismatch { dates: usize, values: usize },
    #[error("upstream fetch failed: {0}")]
    UpstreamFetchFailure(String),
    #[error("duplicate indicator key: {0}")]
    DuplicateKey(String),
    #[error("duplicate subplot group: {0}")]
    DuplicateGroup(String),
    #[error("noise level must be within [0, 1], got {0}")]
    InvalidNoiseLevel(f64),
    #[error("invalid timeframe: {0}")]
    InvalidTimeframe(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
