// File: crates/dashboard-core/src/registry.rs
// Summary: Static catalog of indicator keys, their plot regions, and the subplot groups they belong to.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::{DashboardError, Result};
use crate::record::Column;
use crate::types::{PlotRegion, SeriesKind, SHOW_ALL};

/// Catalog entry for one indicator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorSpec {
    pub key: String,
    pub label: String,
    pub region: PlotRegion,
    pub kind: SeriesKind,
    pub column: Column,
}

impl IndicatorSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, region: PlotRegion, kind: SeriesKind, column: Column) -> Self {
        Self { key: key.into(), label: label.into(), region, kind, column }
    }

    pub fn line(key: impl Into<String>, label: impl Into<String>, region: PlotRegion, column: Column) -> Self {
        Self::new(key, label, region, SeriesKind::Line, column)
    }

    pub fn bar(key: impl Into<String>, label: impl Into<String>, region: PlotRegion, column: Column) -> Self {
        Self::new(key, label, region, SeriesKind::Bar, column)
    }

    pub fn candlestick(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, PlotRegion::Price, SeriesKind::Candlestick, Column::Ohlc)
    }
}

/// Named, curated subset of indicator keys.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SubplotGroup {
    pub name: String,
    pub label: String,
    pub members: IndexSet<String>,
}

impl SubplotGroup {
    pub fn contains(&self, key: &str) -> bool { self.members.contains(key) }
}

/// Read-only indicator catalog. Keys and groups iterate in declaration order.
/// Invariants: keys are unique, every group member is a declared key, and the
/// `SHOW_ALL` group exists and holds every key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndicatorRegistry {
    indicators: IndexMap<String, IndicatorSpec>,
    groups: IndexMap<String, SubplotGroup>,
}

impl IndicatorRegistry {
    pub fn builder() -> RegistryBuilder { RegistryBuilder::default() }

    /// The dashboard's built-in catalog.
    pub fn standard() -> Self {
        standard_builder().assemble()
    }

    pub fn len(&self) -> usize { self.indicators.len() }

    pub fn is_empty(&self) -> bool { self.indicators.is_empty() }

    pub fn contains(&self, key: &str) -> bool { self.indicators.contains_key(key) }

    /// Keys in declaration order (the visual stacking order).
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.indicators.keys().map(String::as_str)
    }

    pub fn indicators(&self) -> impl Iterator<Item = &IndicatorSpec> + '_ {
        self.indicators.values()
    }

    pub fn spec(&self, key: &str) -> Option<&IndicatorSpec> { self.indicators.get(key) }

    /// Groups in selector order, `SHOW_ALL` first.
    pub fn groups(&self) -> impl Iterator<Item = &SubplotGroup> + '_ {
        self.groups.values()
    }

    pub fn group(&self, name: &str) -> Option<&SubplotGroup> { self.groups.get(name) }

    pub fn region_of(&self, key: &str) -> Result<PlotRegion> {
        self.indicators
            .get(key)
            .map(|s| s.region)
            .ok_or_else(|| DashboardError::UnknownIndicatorKey(key.to_string()))
    }

    /// Every group containing `key`; always includes `SHOW_ALL` for known keys.
    pub fn groups_of(&self, key: &str) -> Result<Vec<&SubplotGroup>> {
        if !self.contains(key) {
            return Err(DashboardError::UnknownIndicatorKey(key.to_string()));
        }
        Ok(self.groups.values().filter(|g| g.contains(key)).collect())
    }

    pub fn members_of(&self, group: &str) -> Result<&IndexSet<String>> {
        self.groups
            .get(group)
            .map(|g| &g.members)
            .ok_or_else(|| DashboardError::UnknownGroup(group.to_string()))
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self { Self::standard() }
}

/// Accumulates indicators and groups; `build` validates the catalog invariants.
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    indicators: Vec<IndicatorSpec>,
    groups: Vec<(String, Vec<String>)>,
}

impl RegistryBuilder {
    pub fn indicator(mut self, spec: IndicatorSpec) -> Self {
        self.indicators.push(spec);
        self
    }

    pub fn group<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push((name.into(), members.into_iter().map(Into::into).collect()));
        self
    }

    /// Check uniqueness and membership, then assemble.
    pub fn build(self) -> Result<IndicatorRegistry> {
        self.validate()?;
        Ok(self.assemble())
    }

    pub fn validate(&self) -> Result<()> {
        let mut keys = IndexSet::with_capacity(self.indicators.len());
        for spec in &self.indicators {
            if !keys.insert(spec.key.as_str()) {
                return Err(DashboardError::DuplicateKey(spec.key.clone()));
            }
        }
        let mut names = IndexSet::with_capacity(self.groups.len() + 1);
        names.insert(SHOW_ALL);
        for (name, members) in &self.groups {
            if !names.insert(name.as_str()) {
                return Err(DashboardError::DuplicateGroup(name.clone()));
            }
            if let Some(unknown) = members.iter().find(|m| !keys.contains(m.as_str())) {
                return Err(DashboardError::UnknownIndicatorKey(unknown.clone()));
            }
        }
        Ok(())
    }

    /// Assemble without validation; later duplicates overwrite earlier entries.
    fn assemble(self) -> IndicatorRegistry {
        let indicators: IndexMap<String, IndicatorSpec> =
            self.indicators.into_iter().map(|s| (s.key.clone(), s)).collect();
        let mut groups = IndexMap::with_capacity(self.groups.len() + 1);
        groups.insert(
            SHOW_ALL.to_string(),
            SubplotGroup {
                name: SHOW_ALL.to_string(),
                label: SHOW_ALL.to_string(),
                members: indicators.keys().cloned().collect(),
            },
        );
        for (name, members) in self.groups {
            groups.insert(
                name.clone(),
                SubplotGroup { label: name.clone(), name, members: members.into_iter().collect() },
            );
        }
        IndicatorRegistry { indicators, groups }
    }
}

fn standard_builder() -> RegistryBuilder {
    use Column as C;
    use PlotRegion as R;
    IndicatorRegistry::builder()
        .indicator(IndicatorSpec::candlestick("candlestick", "Candlestick"))
        .indicator(IndicatorSpec::line("vwap", "VWAP", R::Price, C::Vwap))
        .indicator(IndicatorSpec::line("ma10", "10-Day MA", R::Price, C::Ma10))
        .indicator(IndicatorSpec::line("ma50", "50-Day MA", R::Price, C::Ma50))
        .indicator(IndicatorSpec::line("ema10", "10-Day EMA", R::Price, C::Ema10))
        .indicator(IndicatorSpec::line("ema50", "50-Day EMA", R::Price, C::Ema50))
        .indicator(IndicatorSpec::line("pivot", "Pivot", R::Price, C::Pivot))
        .indicator(IndicatorSpec::line("resistance1", "Resistance 1", R::Price, C::R1))
        .indicator(IndicatorSpec::line("support1", "Support 1", R::Price, C::S1))
        .indicator(IndicatorSpec::line("bollingerUpper", "Bollinger Band (Upper)", R::Price, C::BbUpper))
        .indicator(IndicatorSpec::line("bollingerMiddle", "Bollinger Band (Middle)", R::Price, C::BbMiddle))
        .indicator(IndicatorSpec::line("bollingerLower", "Bollinger Band (Lower)", R::Price, C::BbLower))
        .indicator(IndicatorSpec::line("MACD", "MACD", R::Momentum, C::Macd))
        .indicator(IndicatorSpec::line("MACDSignal", "MACD Signal", R::Momentum, C::MacdSignal))
        .indicator(IndicatorSpec::line("RSI", "RSI", R::Oscillator, C::Rsi))
        .indicator(IndicatorSpec::line("stochastic", "Stochastic", R::Oscillator, C::Stochastic))
        .indicator(IndicatorSpec::line("Williams_R", "Williams %R", R::Oscillator, C::WilliamsR))
        .indicator(IndicatorSpec::bar("volume", "Volume", R::Volume, C::Volume))
        .indicator(IndicatorSpec::line("volatility", "Volatility", R::Volume, C::Volatility))
        .group(
            "Price Indicators",
            [
                "candlestick", "vwap", "ma10", "ma50", "ema10", "ema50", "bollingerUpper",
                "bollingerMiddle", "bollingerLower", "pivot", "support1", "resistance1",
            ],
        )
        .group("Momentum (MACD)", ["MACD", "MACDSignal"])
        .group("Oscillators", ["RSI", "stochastic", "Williams_R"])
        .group("Volume/Volatility", ["volume", "volatility"])
}

/// Checkbox text for a key: words split at case changes and underscores,
/// first letter capitalized. Runs of capitals stay together as one word.
/// `"bollingerUpper"` becomes `"Bollinger Upper"`, `"MACDSignal"` becomes `"MACD Signal"`.
pub fn checkbox_label(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' {
            if !out.ends_with(' ') {
                out.push(' ');
            }
            continue;
        }
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary && !out.ends_with(' ') {
                out.push(' ');
            }
        }
        out.push(ch);
    }
    let trimmed = out.trim();
    let mut rest = trimmed.chars();
    match rest.next() {
        Some(first) => first.to_uppercase().chain(rest).collect(),
        None => String::new(),
    }
}
