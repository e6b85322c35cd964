// File: crates/dashboard-core/src/visibility.rs
// Summary: Per-session visibility model: enabled flags per indicator plus the active subplot group.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{DashboardError, Result};
use crate::registry::IndicatorRegistry;
use crate::types::SHOW_ALL;

/// Which indicators are enabled and which subplot group is selected.
///
/// `enabled` always holds exactly the registry's key set. Selecting a group
/// overwrites every flag with group membership; toggling a single indicator
/// changes only that flag and leaves `active_group` alone, so the two may
/// diverge until the next group selection.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityState {
    registry: Arc<IndicatorRegistry>,
    enabled: IndexMap<String, bool>,
    active_group: String,
}

impl VisibilityState {
    /// Seed every key from the `SHOW_ALL` group (all enabled).
    pub fn new(registry: Arc<IndicatorRegistry>) -> Self {
        let enabled = registry.keys().map(|k| (k.to_string(), true)).collect();
        Self { registry, enabled, active_group: SHOW_ALL.to_string() }
    }

    /// Seed from an arbitrary starting group.
    pub fn with_group(registry: Arc<IndicatorRegistry>, group: &str) -> Result<Self> {
        let mut state = Self::new(registry);
        state.select_group(group)?;
        Ok(state)
    }

    pub fn registry(&self) -> &IndicatorRegistry { &self.registry }

    pub fn active_group(&self) -> &str { &self.active_group }

    /// Full enabled mapping in registry order, for rendering checkboxes.
    pub fn enabled(&self) -> &IndexMap<String, bool> { &self.enabled }

    /// Enabled flag of `key`; unknown keys read as not visible.
    pub fn is_visible(&self, key: &str) -> bool {
        self.enabled.get(key).copied().unwrap_or(false)
    }

    /// Flip one indicator. Returns the new flag. Unknown keys leave state untouched.
    pub fn toggle_indicator(&mut self, key: &str) -> Result<bool> {
        match self.enabled.get_mut(key) {
            Some(flag) => {
                *flag = !*flag;
                debug!(key, enabled = *flag, group = %self.active_group, "toggled indicator");
                Ok(*flag)
            }
            None => {
                warn!(key, "toggle of unknown indicator ignored");
                Err(DashboardError::UnknownIndicatorKey(key.to_string()))
            }
        }
    }

    /// Set one indicator explicitly (checkbox bound to a value rather than a flip).
    pub fn set_enabled(&mut self, key: &str, value: bool) -> Result<()> {
        match self.enabled.get_mut(key) {
            Some(flag) => {
                *flag = value;
                debug!(key, enabled = value, "set indicator");
                Ok(())
            }
            None => Err(DashboardError::UnknownIndicatorKey(key.to_string())),
        }
    }

    /// Make `name` the active group and overwrite every flag with membership.
    /// Unknown groups return `UnknownGroup` and keep the previous state.
    pub fn select_group(&mut self, name: &str) -> Result<()> {
        let members = match self.registry.members_of(name) {
            Ok(m) => m,
            Err(e) => {
                warn!(group = name, "selection of unknown subplot group ignored");
                return Err(e);
            }
        };
        for (key, flag) in self.enabled.iter_mut() {
            *flag = members.contains(key.as_str());
        }
        self.active_group = name.to_string();
        debug!(group = name, visible = members.len(), "selected subplot group");
        Ok(())
    }

    /// Named group whose membership equals the current enabled set, if any.
    /// Read-only: `active_group` is never recomputed from this.
    pub fn matching_group(&self) -> Option<&str> {
        self.registry
            .groups()
            .find(|g| self.enabled.iter().all(|(k, &on)| on == g.contains(k)))
            .map(|g| g.name.as_str())
    }

    /// Number of enabled indicators.
    pub fn enabled_count(&self) -> usize {
        self.enabled.values().filter(|&&on| on).count()
    }
}
