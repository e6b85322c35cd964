// File: crates/dashboard-core/src/compose.rs
// Summary: Pure composition of raw records and visibility state into an ordered, renderer-ready series list.

use std::sync::Arc;

use tracing::debug;

use crate::record::{Column, TimeSeriesRecord};
use crate::registry::IndicatorSpec;
use crate::series::{RenderableSeries, SeriesPoints};
use crate::types::{DEFAULT_DATE_FORMAT, SHOW_ALL};
use crate::visibility::VisibilityState;

#[derive(Clone, Debug, PartialEq)]
pub struct ComposeOptions {
    /// Also hide enabled indicators outside the active group (unless it is `SHOW_ALL`).
    pub gate_by_group: bool,
    /// chrono format string for x-axis labels.
    pub date_format: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self { gate_by_group: false, date_format: DEFAULT_DATE_FORMAT.to_string() }
    }
}

/// Compose with default options: one series per registry key, in declaration
/// order, `visible == state.is_visible(key)`.
pub fn compose(records: &[TimeSeriesRecord], state: &VisibilityState) -> Vec<RenderableSeries> {
    compose_with(records, state, &ComposeOptions::default())
}

/// Compose with explicit options. Pure: identical inputs give identical output.
/// An empty `records` slice still yields every series, each with no points.
pub fn compose_with(
    records: &[TimeSeriesRecord],
    state: &VisibilityState,
    opts: &ComposeOptions,
) -> Vec<RenderableSeries> {
    let x: Arc<[String]> = records.iter().map(|r| r.formatted_date(&opts.date_format)).collect();
    let registry = state.registry();
    let gate = opts.gate_by_group && state.active_group() != SHOW_ALL;
    let active = registry.group(state.active_group());

    let out: Vec<RenderableSeries> = registry
        .indicators()
        .map(|spec| {
            let mut visible = state.is_visible(&spec.key);
            if gate {
                visible = visible && active.map(|g| g.contains(&spec.key)).unwrap_or(false);
            }
            RenderableSeries {
                key: spec.key.clone(),
                label: spec.label.clone(),
                kind: spec.kind,
                region: spec.region,
                visible,
                x: Arc::clone(&x),
                points: extract_points(spec, records),
            }
        })
        .collect();

    debug!(
        series = out.len(),
        visible = out.iter().filter(|s| s.visible).count(),
        records = records.len(),
        "composed series"
    );
    out
}

fn extract_points(spec: &IndicatorSpec, records: &[TimeSeriesRecord]) -> SeriesPoints {
    match spec.column {
        Column::Ohlc => SeriesPoints::Ohlc(records.iter().map(TimeSeriesRecord::candle).collect()),
        col => SeriesPoints::Values(records.iter().map(|r| col.value(r)).collect()),
    }
}

