// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; indicator catalog, visibility state, series composition and prediction overlay.

pub mod compose;
pub mod config;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod prediction;
pub mod record;
pub mod registry;
pub mod series;
pub mod session;
pub mod types;
pub mod visibility;

pub use compose::{compose, compose_with, ComposeOptions};
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use layout::ChartLayout;
pub use overlay::{apply_prediction, Prediction};
pub use prediction::{PredictionRequest, PredictionSource, Timeframe};
pub use record::{load_records, Column, TimeSeriesRecord};
pub use registry::{checkbox_label, IndicatorRegistry, IndicatorSpec, SubplotGroup};
pub use series::{Candle, RenderableSeries, SeriesPoints};
pub use session::{Frame, Session};
pub use types::{PlotRegion, SeriesKind, SHOW_ALL};
pub use visibility::VisibilityState;
