// File: crates/dashboard-core/tests/compose.rs
// Purpose: Composition order, gap handling, determinism, and the optional group gate.

use std::sync::Arc;

use dashboard_core::{
    compose, compose_with, ComposeOptions, IndicatorRegistry, PlotRegion, SeriesKind, SeriesPoints,
    TimeSeriesRecord, VisibilityState,
};

const DAY_MS: i64 = 86_400_000;
const OCT_1_2023: i64 = 1_696_118_400_000;

fn records() -> Vec<TimeSeriesRecord> {
    (0..3)
        .map(|i| {
            let mut r = TimeSeriesRecord::ohlc(OCT_1_2023 + i * DAY_MS, 10.0, 12.0, 9.0, 11.0 + i as f64);
            r.volume = Some(1_000.0 * (i + 1) as f64);
            r.rsi = if i == 0 { None } else { Some(50.0 + i as f64) };
            r.ma_10 = None;
            r
        })
        .collect()
}

fn state() -> VisibilityState {
    VisibilityState::new(Arc::new(IndicatorRegistry::standard()))
}

#[test]
fn one_series_per_key_in_declaration_order() {
    let st = state();
    let out = compose(&records(), &st);
    let keys: Vec<&str> = out.iter().map(|s| s.key.as_str()).collect();
    let expected: Vec<&str> = st.registry().keys().collect();
    assert_eq!(keys, expected);
    assert!(out.iter().all(|s| *s.x == ["2023-10-01", "2023-10-02", "2023-10-03"]));
    assert!(out.iter().all(|s| Arc::ptr_eq(&s.x, &out[0].x)));
}

#[test]
fn absent_values_become_gaps() {
    let out = compose(&records(), &state());
    let rsi = out.iter().find(|s| s.key == "RSI").unwrap();
    assert_eq!(rsi.points, SeriesPoints::Values(vec![None, Some(51.0), Some(52.0)]));
    let ma = out.iter().find(|s| s.key == "ma10").unwrap();
    assert_eq!(ma.points.gap_count(), 3);
    assert_eq!(ma.points.len(), 3);
}

#[test]
fn candlestick_and_volume_shapes() {
    let out = compose(&records(), &state());
    let candles = &out[0];
    assert_eq!(candles.kind, SeriesKind::Candlestick);
    match &candles.points {
        SeriesPoints::Ohlc(c) => {
            assert_eq!(c.len(), 3);
            assert_eq!(c[2].c, 13.0);
        }
        other => panic!("expected candles, got {other:?}"),
    }
    let volume = out.iter().find(|s| s.key == "volume").unwrap();
    assert_eq!(volume.kind, SeriesKind::Bar);
    assert_eq!(volume.region, PlotRegion::Volume);
}

#[test]
fn visibility_mirrors_state() {
    let mut st = state();
    st.select_group("Oscillators").unwrap();
    st.toggle_indicator("vwap").unwrap();
    let out = compose(&records(), &st);
    for s in &out {
        assert_eq!(s.visible, st.is_visible(&s.key), "{}", s.key);
    }
    assert!(out.iter().find(|s| s.key == "vwap").unwrap().visible);
}

#[test]
fn empty_records_still_yield_every_series() {
    let st = state();
    let out = compose(&[], &st);
    assert_eq!(out.len(), st.registry().len());
    assert!(out.iter().all(|s| s.points.is_empty() && s.x.is_empty()));
}

#[test]
fn composition_is_deterministic() {
    let recs = records();
    let mut st = state();
    st.select_group("Price Indicators").unwrap();
    st.toggle_indicator("RSI").unwrap();
    let snapshot = st.clone();
    assert_eq!(compose(&recs, &st), compose(&recs, &snapshot));
    assert_eq!(compose(&recs, &st), compose(&recs.clone(), &st));
}

#[test]
fn group_gate_hides_enabled_keys_outside_active_group() {
    let mut st = state();
    st.select_group("Price Indicators").unwrap();
    st.toggle_indicator("RSI").unwrap();
    let gated = ComposeOptions { gate_by_group: true, ..ComposeOptions::default() };

    let plain = compose(&records(), &st);
    let out = compose_with(&records(), &st, &gated);
    assert!(plain.iter().find(|s| s.key == "RSI").unwrap().visible);
    assert!(!out.iter().find(|s| s.key == "RSI").unwrap().visible);
    assert!(out.iter().find(|s| s.key == "ma10").unwrap().visible);

    st.select_group("Show All").unwrap();
    let out = compose_with(&records(), &st, &gated);
    assert!(out.iter().all(|s| s.visible));
}

#[test]
fn custom_date_format() {
    let opts = ComposeOptions { date_format: "%d/%m/%Y".into(), ..ComposeOptions::default() };
    let out = compose_with(&records()[..1], &state(), &opts);
    assert_eq!(*out[0].x, ["01/10/2023"]);
}
