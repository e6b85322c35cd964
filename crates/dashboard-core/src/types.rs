// File: crates/dashboard-core/src/types.rs
// Summary: Shared types and constants (reserved group name, plot regions, series kinds).

use serde::{Deserialize, Serialize};

/// Reserved subplot group holding every registered key.
pub const SHOW_ALL: &str = "Show All";

/// Default x-axis date format (UTC calendar day).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Row of the fixed four-row chart grid a series is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlotRegion {
    Price,
    Momentum,
    Oscillator,
    Volume,
}

impl PlotRegion {
    /// All regions, top row first.
    pub const ALL: [PlotRegion; 4] = [
        PlotRegion::Price,
        PlotRegion::Momentum,
        PlotRegion::Oscillator,
        PlotRegion::Volume,
    ];

    /// Y axis identifier the renderer binds this row to.
    pub const fn axis_id(&self) -> &'static str {
        match self {
            PlotRegion::Price => "y",
            PlotRegion::Momentum => "y2",
            PlotRegion::Oscillator => "y3",
            PlotRegion::Volume => "y4",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            PlotRegion::Price => "Price",
            PlotRegion::Momentum => "MACD",
            PlotRegion::Oscillator => "Oscillators",
            PlotRegion::Volume => "Volume/Volatility",
        }
    }

    /// Vertical domain as (bottom, top) fractions of the figure height.
    pub const fn domain(&self) -> (f64, f64) {
        match self {
            PlotRegion::Price => (0.75, 1.0),
            PlotRegion::Momentum => (0.5, 0.75),
            PlotRegion::Oscillator => (0.25, 0.5),
            PlotRegion::Volume => (0.0, 0.25),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Candlestick,
    Line,
    Bar,
}
