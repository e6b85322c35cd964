// File: crates/dashboard-core/tests/registry.rs
// Purpose: Catalog lookups, group membership, and builder validation.

use dashboard_core::record::Column;
use dashboard_core::{DashboardError, IndicatorRegistry, IndicatorSpec, PlotRegion, SHOW_ALL};

fn small_registry() -> IndicatorRegistry {
    IndicatorRegistry::builder()
        .indicator(IndicatorSpec::line("ma10", "10-Day MA", PlotRegion::Price, Column::Ma10))
        .indicator(IndicatorSpec::line("RSI", "RSI", PlotRegion::Oscillator, Column::Rsi))
        .indicator(IndicatorSpec::bar("volume", "Volume", PlotRegion::Volume, Column::Volume))
        .group("Price Indicators", ["ma10"])
        .build()
        .expect("valid registry")
}

#[test]
fn region_lookup_and_unknown_key() {
    let reg = small_registry();
    assert_eq!(reg.region_of("ma10").unwrap(), PlotRegion::Price);
    assert_eq!(reg.region_of("RSI").unwrap(), PlotRegion::Oscillator);
    assert!(matches!(reg.region_of("nope"), Err(DashboardError::UnknownIndicatorKey(k)) if k == "nope"));
}

#[test]
fn show_all_is_synthesized_first_and_holds_every_key() {
    let reg = small_registry();
    let names: Vec<&str> = reg.groups().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec![SHOW_ALL, "Price Indicators"]);
    let all: Vec<&str> = reg.members_of(SHOW_ALL).unwrap().iter().map(String::as_str).collect();
    assert_eq!(all, vec!["ma10", "RSI", "volume"]);
}

#[test]
fn groups_of_includes_show_all() {
    let reg = small_registry();
    let g: Vec<&str> = reg.groups_of("ma10").unwrap().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(g, vec![SHOW_ALL, "Price Indicators"]);
    let g: Vec<&str> = reg.groups_of("RSI").unwrap().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(g, vec![SHOW_ALL]);
    assert!(reg.groups_of("missing").is_err());
}

#[test]
fn members_of_unknown_group() {
    let reg = small_registry();
    assert!(matches!(reg.members_of("Oscillators"), Err(DashboardError::UnknownGroup(_))));
}

#[test]
fn builder_rejects_duplicates_and_dangling_members() {
    let dup = IndicatorRegistry::builder()
        .indicator(IndicatorSpec::line("ma10", "a", PlotRegion::Price, Column::Ma10))
        .indicator(IndicatorSpec::line("ma10", "b", PlotRegion::Price, Column::Ma10))
        .build();
    assert!(matches!(dup, Err(DashboardError::DuplicateKey(k)) if k == "ma10"));

    let dangling = IndicatorRegistry::builder()
        .indicator(IndicatorSpec::line("ma10", "a", PlotRegion::Price, Column::Ma10))
        .group("G", ["ma10", "ghost"])
        .build();
    assert!(matches!(dangling, Err(DashboardError::UnknownIndicatorKey(k)) if k == "ghost"));

    let reserved = IndicatorRegistry::builder()
        .indicator(IndicatorSpec::line("ma10", "a", PlotRegion::Price, Column::Ma10))
        .group(SHOW_ALL, ["ma10"])
        .build();
    assert!(matches!(reserved, Err(DashboardError::DuplicateGroup(_))));
}

#[test]
fn standard_catalog_stacks_regions_top_down() {
    let reg = IndicatorRegistry::standard();
    let regions: Vec<PlotRegion> = reg.indicators().map(|s| s.region).collect();
    let mut sorted = regions.clone();
    sorted.sort();
    assert_eq!(regions, sorted, "declaration order must follow Price, Momentum, Oscillator, Volume");
    assert_eq!(reg.keys().next(), Some("candlestick"));
    assert_eq!(reg.keys().last(), Some("volatility"));
}

#[test]
fn standard_groups_match_their_regions() {
    let reg = IndicatorRegistry::standard();
    let cases = [
        ("Price Indicators", PlotRegion::Price),
        ("Momentum (MACD)", PlotRegion::Momentum),
        ("Oscillators", PlotRegion::Oscillator),
        ("Volume/Volatility", PlotRegion::Volume),
    ];
    for (group, region) in cases {
        let members = reg.members_of(group).unwrap();
        let expected: Vec<&str> = reg.indicators().filter(|s| s.region == region).map(|s| s.key.as_str()).collect();
        assert_eq!(members.len(), expected.len(), "{group}");
        for key in expected {
            assert!(members.contains(key), "{group} should contain {key}");
        }
    }
}
