// File: crates/dashboard-core/src/config.rs
// Summary: Dashboard configuration (default group, gating, date format, prediction defaults) from JSON + env.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::compose::ComposeOptions;
use crate::error::Result;
use crate::prediction::{Timeframe, DEFAULT_NOISE_LEVEL};
use crate::types::{DEFAULT_DATE_FORMAT, SHOW_ALL};

pub const ENV_DEFAULT_GROUP: &str = "DASHBOARD_DEFAULT_GROUP";
pub const ENV_GATE_BY_GROUP: &str = "DASHBOARD_GATE_BY_GROUP";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub default_group: String,
    pub gate_by_group: bool,
    pub date_format: String,
    pub prediction: PredictionDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionDefaults {
    pub timeframe: Timeframe,
    pub noise_level: f64,
}

impl Default for PredictionDefaults {
    fn default() -> Self {
        Self { timeframe: Timeframe::default(), noise_level: DEFAULT_NOISE_LEVEL }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_group: SHOW_ALL.to_string(),
            gate_by_group: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            prediction: PredictionDefaults::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_json_str(&text)?;
        debug!(path = %path.as_ref().display(), "loaded dashboard config");
        Ok(cfg)
    }

    /// Apply `DASHBOARD_DEFAULT_GROUP` / `DASHBOARD_GATE_BY_GROUP` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    pub fn with_overrides<F: Fn(&str) -> Option<String>>(mut self, lookup: F) -> Self {
        if let Some(group) = lookup(ENV_DEFAULT_GROUP).filter(|g| !g.trim().is_empty()) {
            self.default_group = group.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_GATE_BY_GROUP) {
            match parse_bool(&raw) {
                Some(v) => self.gate_by_group = v,
                None => warn!(value = %raw, "ignoring unparseable {}", ENV_GATE_BY_GROUP),
            }
        }
        self
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions { gate_by_group: self.gate_by_group, date_format: self.date_format.clone() }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
