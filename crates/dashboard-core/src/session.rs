// File: crates/dashboard-core/src/session.rs
// Summary: One viewing session: owns the visibility state, active symbol, records and latest prediction.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::compose::{compose_with, ComposeOptions};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::layout::ChartLayout;
use crate::overlay::{apply_prediction, Prediction};
use crate::prediction::{PredictionRequest, PredictionSource, Timeframe};
use crate::record::TimeSeriesRecord;
use crate::registry::IndicatorRegistry;
use crate::series::RenderableSeries;
use crate::visibility::VisibilityState;

/// Output of one render pass.
#[derive(Debug)]
pub struct Frame {
    pub layout: ChartLayout,
    pub series: Vec<RenderableSeries>,
    /// Set when a stored prediction could not be overlaid (length mismatch).
    pub overlay_error: Option<DashboardError>,
}

impl Frame {
    pub fn visible(&self) -> impl Iterator<Item = &RenderableSeries> + '_ {
        self.series.iter().filter(|s| s.visible)
    }
}

/// Session-scoped owner of all mutable dashboard state. Created on mount,
/// mutated by UI events, dropped on unmount; nothing is persisted.
#[derive(Debug)]
pub struct Session {
    state: VisibilityState,
    options: ComposeOptions,
    config: DashboardConfig,
    symbol: String,
    records: Vec<TimeSeriesRecord>,
    prediction: Option<Prediction>,
    last_error: Option<DashboardError>,
}

impl Session {
    /// Start a session on the configured default group.
    pub fn new(registry: Arc<IndicatorRegistry>, config: DashboardConfig) -> Result<Self> {
        let state = VisibilityState::with_group(registry, &config.default_group)?;
        Ok(Self {
            state,
            options: config.compose_options(),
            config,
            symbol: String::new(),
            records: Vec::new(),
            prediction: None,
            last_error: None,
        })
    }

    pub fn state(&self) -> &VisibilityState { &self.state }

    pub fn config(&self) -> &DashboardConfig { &self.config }

    pub fn symbol(&self) -> &str { &self.symbol }

    pub fn records(&self) -> &[TimeSeriesRecord] { &self.records }

    pub fn prediction(&self) -> Option<&Prediction> { self.prediction.as_ref() }

    pub fn last_error(&self) -> Option<&DashboardError> { self.last_error.as_ref() }

    pub fn toggle_indicator(&mut self, key: &str) -> Result<bool> {
        self.state.toggle_indicator(key)
    }

    pub fn select_group(&mut self, name: &str) -> Result<()> {
        self.state.select_group(name)
    }

    pub fn matching_group(&self) -> Option<&str> { self.state.matching_group() }

    /// Switch to `symbol` with freshly fetched records. Visibility is kept;
    /// any stored prediction for the previous symbol stops rendering.
    pub fn navigate(&mut self, symbol: impl Into<String>, records: Vec<TimeSeriesRecord>) {
        self.symbol = symbol.into();
        self.records = records;
        self.last_error = None;
        info!(symbol = %self.symbol, records = self.records.len(), "navigated");
    }

    /// Record a failed record fetch for `symbol`; the chart shows no bars.
    pub fn records_failed(&mut self, symbol: impl Into<String>, reason: impl Into<String>) {
        self.symbol = symbol.into();
        self.records.clear();
        let reason = reason.into();
        warn!(symbol = %self.symbol, %reason, "record fetch failed");
        self.last_error = Some(DashboardError::UpstreamFetchFailure(reason));
    }

    /// Accept the outcome of a prediction fetch issued for `symbol`.
    /// Returns whether a prediction was kept.
    ///
    /// Outcomes for a symbol other than the active one are dropped, so a late
    /// reply to a superseded request, success or failure, never touches the
    /// current prediction. Failures for the active symbol clear the prediction
    /// and are kept as `last_error`.
    pub fn receive_prediction(&mut self, symbol: &str, result: Result<Prediction>) -> bool {
        if symbol != self.symbol {
            debug!(requested = %symbol, active = %self.symbol, "discarding outcome for superseded symbol");
            return false;
        }
        match result {
            Ok(pred) if pred.symbol == self.symbol => {
                debug!(symbol = %pred.symbol, points = pred.values.len(), "prediction received");
                self.prediction = Some(pred);
                self.last_error = None;
                true
            }
            Ok(pred) => {
                warn!(prediction = %pred.symbol, active = %self.symbol, "discarding prediction for another symbol");
                false
            }
            Err(e) => {
                warn!(symbol = %self.symbol, error = %e, "prediction fetch failed");
                self.prediction = None;
                self.last_error = Some(e);
                false
            }
        }
    }

    /// Ask `source` for a prediction on the active symbol and feed the result
    /// to `receive_prediction`. Invalid parameters are returned without
    /// contacting the source.
    pub fn request_prediction<S: PredictionSource + ?Sized>(
        &mut self,
        source: &S,
        timeframe: Timeframe,
        noise_level: f64,
    ) -> Result<bool> {
        let request = PredictionRequest::new(self.symbol.clone(), timeframe, noise_level)?;
        debug!(symbol = %request.symbol, days = request.timeframe.days(), noise = request.noise_level, "requesting prediction");
        let result = source.predict(&request);
        Ok(self.receive_prediction(&request.symbol, result))
    }

    /// Request with the configured default timeframe and noise level.
    pub fn request_default_prediction<S: PredictionSource + ?Sized>(&mut self, source: &S) -> Result<bool> {
        let defaults = self.config.prediction.clone();
        self.request_prediction(source, defaults.timeframe, defaults.noise_level)
    }

    /// Compose the current records and state, then overlay the prediction.
    /// Side-effect free; safe to call after every event.
    pub fn render(&self) -> Frame {
        let composed = compose_with(&self.records, &self.state, &self.options);
        let overlaid =
            apply_prediction(&composed, self.prediction.as_ref(), &self.symbol).map(Cow::into_owned);
        let (series, overlay_error) = match overlaid {
            Ok(series) => (series, None),
            Err(e) => (composed, Some(e)),
        };
        Frame { layout: ChartLayout::for_symbol(&self.symbol), series, overlay_error }
    }
}
