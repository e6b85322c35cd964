// File: crates/dashboard-core/src/layout.rs
// Summary: Fixed four-row chart grid; each plot region owns one row with its own y axis.

use serde::Serialize;

use crate::series::RenderableSeries;
use crate::types::PlotRegion;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowLayout {
    pub region: PlotRegion,
    pub axis_id: &'static str,
    pub title: &'static str,
    /// (bottom, top) as fractions of figure height.
    pub domain: (f64, f64),
}

impl RowLayout {
    pub const fn for_region(region: PlotRegion) -> Self {
        Self { region, axis_id: region.axis_id(), title: region.title(), domain: region.domain() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub x_title: &'static str,
    pub rows: [RowLayout; 4],
}

impl ChartLayout {
    pub fn for_symbol(symbol: &str) -> Self {
        Self {
            title: format!("{symbol} Stock Price Candlestick"),
            x_title: "Date",
            rows: PlotRegion::ALL.map(RowLayout::for_region),
        }
    }

    pub fn row(&self, region: PlotRegion) -> &RowLayout {
        // rows are laid out in PlotRegion::ALL order
        &self.rows[region as usize]
    }

    /// Series for one row, preserving composition order.
    pub fn series_in<'a>(
        &self,
        region: PlotRegion,
        series: &'a [RenderableSeries],
    ) -> impl Iterator<Item = &'a RenderableSeries> + 'a {
        series.iter().filter(move |s| s.region == region)
    }
}
