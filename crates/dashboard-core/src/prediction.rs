// File: crates/dashboard-core/src/prediction.rs
// Summary: Prediction request parameters and the collaborator trait that fulfils them.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::overlay::Prediction;

/// Noise level the prediction backend applies when the caller does not choose one.
pub const DEFAULT_NOISE_LEVEL: f64 = 0.000000000016180339887;

/// Prediction horizon in days, 1..=180.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Timeframe(u16);

impl Timeframe {
    pub const MAX_DAYS: u16 = 180;

    /// Horizons offered by the selector.
    pub const PRESETS: [Timeframe; 8] = [
        Timeframe(1),
        Timeframe(5),
        Timeframe(15),
        Timeframe(30),
        Timeframe(45),
        Timeframe(60),
        Timeframe(90),
        Timeframe(180),
    ];

    pub fn from_days(days: u16) -> Result<Self> {
        if (1..=Self::MAX_DAYS).contains(&days) {
            Ok(Self(days))
        } else {
            Err(DashboardError::InvalidTimeframe(days.to_string()))
        }
    }

    pub const fn days(&self) -> u16 { self.0 }
}

impl Default for Timeframe {
    fn default() -> Self { Self(30) }
}

impl TryFrom<u16> for Timeframe {
    type Error = DashboardError;
    fn try_from(days: u16) -> Result<Self> { Self::from_days(days) }
}

impl From<Timeframe> for u16 {
    fn from(t: Timeframe) -> u16 { t.0 }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 { write!(f, "1 Day") } else { write!(f, "{} Days", self.0) }
    }
}

/// Accepts "30", "30d", "30 Days", "1 Day".
impl FromStr for Timeframe {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_suffix("days")
            .or_else(|| lower.strip_suffix("day"))
            .or_else(|| lower.strip_suffix('d'))
            .unwrap_or(lower.as_str())
            .trim();
        let days = digits.parse::<u16>().map_err(|_| DashboardError::InvalidTimeframe(s.to_string()))?;
        Self::from_days(days).map_err(|_| DashboardError::InvalidTimeframe(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub noise_level: f64,
}

impl PredictionRequest {
    pub fn new(symbol: impl Into<String>, timeframe: Timeframe, noise_level: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&noise_level) {
            return Err(DashboardError::InvalidNoiseLevel(noise_level));
        }
        Ok(Self { symbol: symbol.into(), timeframe, noise_level })
    }
}

/// Collaborator that produces predictions. Failures surface as `UpstreamFetchFailure`.
pub trait PredictionSource {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction>;
}

impl<F> PredictionSource for F
where
    F: Fn(&PredictionRequest) -> Result<Prediction>,
{
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction> { self(request) }
}

/// Serves a prediction previously saved as JSON; read and parse errors count as upstream failures.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl PredictionSource for JsonFileSource {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            DashboardError::UpstreamFetchFailure(format!("{}: {e}", self.path.display()))
        })?;
        let pred = Prediction::from_json_str(&text).map_err(|e| {
            DashboardError::UpstreamFetchFailure(format!("{}: {e}", self.path.display()))
        })?;
        debug!(symbol = %request.symbol, served = %pred.symbol, points = pred.values.len(), "served prediction from file");
        Ok(pred)
    }
}
