// File: crates/dashboard-examples/src/bin/session.rs
// Summary: Minimal walkthrough of a viewing session: pick a group, toggle an indicator, overlay a prediction.

use std::sync::Arc;

use dashboard_core::{DashboardConfig, IndicatorRegistry, Prediction, Session, TimeSeriesRecord};

fn main() {
    // Three daily bars starting 2023-10-01
    let mut records = Vec::new();
    for (i, close) in [150.0, 151.0, 152.0].into_iter().enumerate() {
        let mut r = TimeSeriesRecord::ohlc(1_696_118_400_000 + i as i64 * 86_400_000, close - 1.0, close + 1.0, close - 2.0, close);
        r.volume = Some(5_000_000.0 - i as f64 * 250_000.0);
        r.rsi = (i > 0).then_some(48.0 + i as f64);
        records.push(r);
    }

    let registry = Arc::new(IndicatorRegistry::standard());
    let mut session = Session::new(registry, DashboardConfig::default()).expect("default group exists");
    session.navigate("AAPL", records);

    session.select_group("Price Indicators").expect("group exists");
    session.toggle_indicator("RSI").expect("key exists");
    session.receive_prediction("AAPL", Ok(Prediction::new("AAPL", vec!["2023-10-04".into()], vec![153.2])));

    let frame = session.render();
    println!("{} (group: {})", frame.layout.title, session.state().active_group());
    for s in frame.visible() {
        println!("  {:?}/{:<24} {} points", s.region, s.label, s.points.len());
    }
}
