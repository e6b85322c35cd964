// File: crates/dashboard-core/src/record.rs
// Summary: Sampled bar records as delivered by the candlestick endpoint, plus JSON/CSV loaders.

use std::io::Read;
use std::path::Path;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::series::Candle;

/// One sampled bar: timestamp, OHLCV and the precomputed indicator columns.
/// Indicator columns are `None` where the backend had no value (e.g. a moving
/// average before enough history exists).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    /// Epoch milliseconds.
    #[serde(rename = "Date")]
    pub date: i64,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume", default)]
    pub volume: Option<f64>,
    #[serde(rename = "Dividends", default)]
    pub dividends: Option<f64>,
    #[serde(rename = "StockSplits", default)]
    pub stock_splits: Option<f64>,
    #[serde(rename = "VWAP", default)]
    pub vwap: Option<f64>,
    #[serde(rename = "MA_10", default)]
    pub ma_10: Option<f64>,
    #[serde(rename = "MA_50", default)]
    pub ma_50: Option<f64>,
    #[serde(rename = "EMA_10", default)]
    pub ema_10: Option<f64>,
    #[serde(rename = "EMA_50", default)]
    pub ema_50: Option<f64>,
    #[serde(rename = "RSI", default)]
    pub rsi: Option<f64>,
    #[serde(rename = "BB_Lower", default)]
    pub bb_lower: Option<f64>,
    #[serde(rename = "BB_Middle", default)]
    pub bb_middle: Option<f64>,
    #[serde(rename = "BB_Upper", default)]
    pub bb_upper: Option<f64>,
    #[serde(rename = "MACD", default)]
    pub macd: Option<f64>,
    #[serde(rename = "MACD_Signal", default)]
    pub macd_signal: Option<f64>,
    #[serde(rename = "MACD_Hist", default)]
    pub macd_hist: Option<f64>,
    #[serde(rename = "Stochastic", default)]
    pub stochastic: Option<f64>,
    #[serde(rename = "Williams_R", default)]
    pub williams_r: Option<f64>,
    #[serde(rename = "Parabolic_SAR", default)]
    pub parabolic_sar: Option<f64>,
    #[serde(rename = "OBV", default)]
    pub obv: Option<f64>,
    #[serde(rename = "Pivot", default)]
    pub pivot: Option<f64>,
    #[serde(rename = "R1", default)]
    pub r1: Option<f64>,
    #[serde(rename = "S1", default)]
    pub s1: Option<f64>,
    #[serde(rename = "Volatility", default)]
    pub volatility: Option<f64>,
}

impl TimeSeriesRecord {
    /// Bare OHLC bar; every optional column starts absent.
    pub fn ohlc(date: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self { date, open, high, low, close, ..Self::default() }
    }

    pub fn candle(&self) -> Candle {
        Candle { t: self.date as f64, o: self.open, h: self.high, l: self.low, c: self.close }
    }

    /// Format the timestamp for the x axis. Out-of-range timestamps fall back to the raw millis.
    pub fn formatted_date(&self, fmt: &str) -> String {
        match DateTime::from_timestamp_millis(self.date) {
            Some(dt) => dt.format(fmt).to_string(),
            None => self.date.to_string(),
        }
    }
}

/// Record column an indicator reads its values from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Full OHLC bar; read as a candle rather than a scalar.
    Ohlc,
    Close,
    Volume,
    Vwap,
    Ma10,
    Ma50,
    Ema10,
    Ema50,
    Rsi,
    BbLower,
    BbMiddle,
    BbUpper,
    Macd,
    MacdSignal,
    MacdHist,
    Stochastic,
    WilliamsR,
    ParabolicSar,
    Obv,
    Pivot,
    R1,
    S1,
    Volatility,
}

impl Column {
    /// Scalar value of this column; `Ohlc` yields the close.
    pub fn value(&self, rec: &TimeSeriesRecord) -> Option<f64> {
        match self {
            Column::Ohlc | Column::Close => Some(rec.close),
            Column::Volume => rec.volume,
            Column::Vwap => rec.vwap,
            Column::Ma10 => rec.ma_10,
            Column::Ma50 => rec.ma_50,
            Column::Ema10 => rec.ema_10,
            Column::Ema50 => rec.ema_50,
            Column::Rsi => rec.rsi,
            Column::BbLower => rec.bb_lower,
            Column::BbMiddle => rec.bb_middle,
            Column::BbUpper => rec.bb_upper,
            Column::Macd => rec.macd,
            Column::MacdSignal => rec.macd_signal,
            Column::MacdHist => rec.macd_hist,
            Column::Stochastic => rec.stochastic,
            Column::WilliamsR => rec.williams_r,
            Column::ParabolicSar => rec.parabolic_sar,
            Column::Obv => rec.obv,
            Column::Pivot => rec.pivot,
            Column::R1 => rec.r1,
            Column::S1 => rec.s1,
            Column::Volatility => rec.volatility,
        }
    }
}

/// Body of the candlestick endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CandlestickResponse {
    pub symbol: String,
    pub data: Vec<TimeSeriesRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsPayload {
    Wrapped(CandlestickResponse),
    Bare(Vec<TimeSeriesRecord>),
}

/// Parse records from either the wrapped `{symbol, data}` body or a bare array.
pub fn records_from_json_str(s: &str) -> Result<Vec<TimeSeriesRecord>> {
    let records = match serde_json::from_str::<RecordsPayload>(s)? {
        RecordsPayload::Wrapped(resp) => resp.data,
        RecordsPayload::Bare(v) => v,
    };
    debug!(count = records.len(), "parsed json records");
    Ok(records)
}

/// Parse records from CSV using the same column headers as the JSON body.
/// Empty cells become absent values.
pub fn records_from_csv<R: Read>(rdr: R) -> Result<Vec<TimeSeriesRecord>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(rdr);
    let mut out = Vec::new();
    for rec in reader.deserialize() {
        out.push(rec?);
    }
    debug!(count = out.len(), "parsed csv records");
    Ok(out)
}

/// Load records from a `.json` or `.csv` file, chosen by extension (CSV otherwise).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<TimeSeriesRecord>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        let text = std::fs::read_to_string(path)?;
        records_from_json_str(&text)
    } else {
        let file = std::fs::File::open(path)?;
        records_from_csv(file)
    }
}
