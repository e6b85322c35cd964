// File: crates/dashboard-core/src/overlay.rs
// Summary: Prediction overlay; merges a symbol-scoped prediction series into the composed list.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DashboardError, Result};
use crate::series::RenderableSeries;
use crate::types::PlotRegion;

pub const PREDICTION_KEY: &str = "prediction";
pub const PREDICTION_LABEL: &str = "Prediction";

/// Model output for exactly one symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    pub dates: Vec<String>,
    #[serde(alias = "data")]
    pub values: Vec<f64>,
}

impl Prediction {
    pub fn new(symbol: impl Into<String>, dates: Vec<String>, values: Vec<f64>) -> Self {
        Self { symbol: symbol.into(), dates, values }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Dates and values must pair up one-to-one.
    pub fn validate(&self) -> Result<()> {
        if self.dates.len() != self.values.len() {
            return Err(DashboardError::PredictionDataMismatch {
                dates: self.dates.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Price-row line series, always visible.
    pub fn to_series(&self) -> Result<RenderableSeries> {
        self.validate()?;
        Ok(RenderableSeries::line(
            PREDICTION_KEY,
            PREDICTION_LABEL,
            PlotRegion::Price,
            self.dates.as_slice(),
            self.values.iter().copied().map(Some).collect(),
        ))
    }
}

/// Append the prediction series when it belongs to `active_symbol`.
///
/// Absent or foreign-symbol predictions return the input borrowed and
/// untouched; this is what drops late results from a superseded symbol.
/// A dates/values length mismatch is reported and nothing is appended.
pub fn apply_prediction<'a>(
    series: &'a [RenderableSeries],
    prediction: Option<&Prediction>,
    active_symbol: &str,
) -> Result<Cow<'a, [RenderableSeries]>> {
    let Some(pred) = prediction else {
        return Ok(Cow::Borrowed(series));
    };
    if pred.symbol != active_symbol {
        debug!(prediction = %pred.symbol, active = active_symbol, "skipping prediction for other symbol");
        return Ok(Cow::Borrowed(series));
    }
    let overlay = pred.to_series().map_err(|e| {
        warn!(symbol = %pred.symbol, error = %e, "prediction overlay omitted");
        e
    })?;
    let mut out = Vec::with_capacity(series.len() + 1);
    out.extend_from_slice(series);
    out.push(overlay);
    Ok(Cow::Owned(out))
}
