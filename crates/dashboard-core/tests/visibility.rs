// File: crates/dashboard-core/tests/visibility.rs
// Purpose: Group selection propagation, per-indicator toggles, and the toggle/group asymmetry.

use std::sync::Arc;

use dashboard_core::record::Column;
use dashboard_core::{DashboardError, IndicatorRegistry, IndicatorSpec, PlotRegion, VisibilityState, SHOW_ALL};

fn small_registry() -> Arc<IndicatorRegistry> {
    Arc::new(
        IndicatorRegistry::builder()
            .indicator(IndicatorSpec::line("ma10", "10-Day MA", PlotRegion::Price, Column::Ma10))
            .indicator(IndicatorSpec::line("RSI", "RSI", PlotRegion::Oscillator, Column::Rsi))
            .indicator(IndicatorSpec::bar("volume", "Volume", PlotRegion::Volume, Column::Volume))
            .group("Price Indicators", ["ma10"])
            .build()
            .expect("valid registry"),
    )
}

#[test]
fn new_state_covers_exactly_the_registry_keys() {
    let reg = small_registry();
    let state = VisibilityState::new(reg.clone());
    let keys: Vec<&str> = state.enabled().keys().map(String::as_str).collect();
    let reg_keys: Vec<&str> = reg.keys().collect();
    assert_eq!(keys, reg_keys);
    assert_eq!(state.active_group(), SHOW_ALL);
    assert!(state.enabled().values().all(|&v| v));
}

#[test]
fn select_group_sets_membership_for_every_key() {
    let reg = Arc::new(IndicatorRegistry::standard());
    let mut state = VisibilityState::new(reg.clone());
    let names: Vec<String> = reg.groups().map(|g| g.name.clone()).collect();
    for name in names {
        state.select_group(&name).unwrap();
        assert_eq!(state.active_group(), name);
        let members = reg.members_of(&name).unwrap();
        for key in reg.keys() {
            assert_eq!(state.is_visible(key), members.contains(key), "{name}/{key}");
        }
    }
}

#[test]
fn show_all_enables_everything_after_customization() {
    let mut state = VisibilityState::new(small_registry());
    state.select_group("Price Indicators").unwrap();
    state.toggle_indicator("ma10").unwrap();
    state.select_group(SHOW_ALL).unwrap();
    assert_eq!(state.enabled_count(), 3);
}

#[test]
fn double_toggle_restores_and_isolates() {
    let mut state = VisibilityState::new(small_registry());
    state.select_group("Price Indicators").unwrap();
    let before = state.clone();
    assert_eq!(state.toggle_indicator("RSI").unwrap(), true);
    assert_eq!(state.toggle_indicator("RSI").unwrap(), false);
    assert_eq!(state, before);
}

#[test]
fn price_group_scenario_then_toggle_keeps_group() {
    let mut state = VisibilityState::new(small_registry());
    state.select_group("Price Indicators").unwrap();
    assert!(state.is_visible("ma10"));
    assert!(!state.is_visible("RSI"));
    assert!(!state.is_visible("volume"));

    state.toggle_indicator("RSI").unwrap();
    assert!(state.is_visible("RSI"));
    assert_eq!(state.active_group(), "Price Indicators");
    assert_eq!(state.matching_group(), None);
}

#[test]
fn unknown_group_is_rejected_and_state_kept() {
    let mut state = VisibilityState::new(small_registry());
    state.select_group("Price Indicators").unwrap();
    state.toggle_indicator("volume").unwrap();
    let before = state.clone();
    let err = state.select_group("Nope").unwrap_err();
    assert!(matches!(err, DashboardError::UnknownGroup(g) if g == "Nope"));
    assert_eq!(state, before);
}

#[test]
fn unknown_key_reads_hidden_and_never_enters_the_map() {
    let mut state = VisibilityState::new(small_registry());
    assert!(!state.is_visible("ghost"));
    assert!(matches!(state.toggle_indicator("ghost"), Err(DashboardError::UnknownIndicatorKey(_))));
    assert!(state.set_enabled("ghost", true).is_err());
    assert_eq!(state.enabled().len(), 3);
    assert!(!state.enabled().contains_key("ghost"));
}

#[test]
fn matching_group_tracks_enabled_set_without_touching_active() {
    let mut state = VisibilityState::new(small_registry());
    assert_eq!(state.matching_group(), Some(SHOW_ALL));
    state.toggle_indicator("RSI").unwrap();
    state.toggle_indicator("volume").unwrap();
    assert_eq!(state.matching_group(), Some("Price Indicators"));
    assert_eq!(state.active_group(), SHOW_ALL);
}

#[test]
fn with_group_seeds_from_the_named_group() {
    let state = VisibilityState::with_group(small_registry(), "Price Indicators").unwrap();
    assert_eq!(state.enabled_count(), 1);
    assert!(VisibilityState::with_group(small_registry(), "Nope").is_err());
}
