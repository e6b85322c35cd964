// File: crates/dashboard-core/src/series.rs
// Summary: Renderable series model (candles, gapped lines, bars) tagged with plot region and visibility.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{PlotRegion, SeriesKind};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub t: f64, // epoch millis
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

/// Point payload of a series. Scalar points keep `None` as an explicit gap so
/// renderers draw no segment there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SeriesPoints {
    Ohlc(Vec<Candle>),
    Values(Vec<Option<f64>>),
}

impl SeriesPoints {
    pub fn len(&self) -> usize {
        match self {
            SeriesPoints::Ohlc(v) => v.len(),
            SeriesPoints::Values(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Number of gap markers (always zero for OHLC).
    pub fn gap_count(&self) -> usize {
        match self {
            SeriesPoints::Ohlc(_) => 0,
            SeriesPoints::Values(v) => v.iter().filter(|p| p.is_none()).count(),
        }
    }
}

/// One renderer-ready series. Derived per render pass; never mutated after composition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderableSeries {
    pub key: String,
    pub label: String,
    pub kind: SeriesKind,
    pub region: PlotRegion,
    pub visible: bool,
    /// Formatted x-axis labels, one per point. Shared by every series of one composition.
    pub x: Arc<[String]>,
    pub points: SeriesPoints,
}

impl RenderableSeries {
    pub fn line(key: impl Into<String>, label: impl Into<String>, region: PlotRegion, x: impl Into<Arc<[String]>>, values: Vec<Option<f64>>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: SeriesKind::Line,
            region,
            visible: true,
            x: x.into(),
            points: SeriesPoints::Values(values),
        }
    }
}
