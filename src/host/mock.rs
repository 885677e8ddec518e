//! In-memory mock host for tests
//!
//! Stores settings keyed by pattern, records every icon render and reload,
//! and counts settings reads and writes so tests can assert on exactly what
//! the toggler touched. Write failure is injectable to exercise the abort
//! path.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::{JsSetting, Tab, TabId, TogglerError, TogglerResult};
use crate::toggler::{pattern_from_url, IconSet};

use super::browser::HostBrowser;

#[derive(Debug, Default)]
struct MockState {
    tabs: Vec<Tab>,
    settings: HashMap<String, JsSetting>,
    icons: HashMap<TabId, IconSet>,
    reloads: Vec<TabId>,
    setting_reads: usize,
    setting_writes: usize,
    fail_writes: bool,
}

/// Mock host browser backed by in-memory maps
#[derive(Debug, Default)]
pub struct MockHost {
    state: RwLock<MockState>,
}

impl MockHost {
    /// Create an empty mock host
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock host with initial tabs
    pub fn with_tabs(tabs: Vec<Tab>) -> Self {
        let host = Self::new();
        host.state.write().unwrap().tabs = tabs;
        host
    }

    /// Add a tab
    pub fn add_tab(&self, tab: Tab) {
        self.state.write().unwrap().tabs.push(tab);
    }

    /// Make every subsequent settings write fail
    pub fn fail_writes(&self, fail: bool) {
        self.state.write().unwrap().fail_writes = fail;
    }

    /// Seed a stored setting directly, bypassing the write counter
    pub fn seed_setting(&self, pattern: impl Into<String>, setting: JsSetting) {
        self.state.write().unwrap().settings.insert(pattern.into(), setting);
    }

    /// Stored setting for a pattern
    pub fn stored_setting(&self, pattern: &str) -> Option<JsSetting> {
        self.state.read().unwrap().settings.get(pattern).copied()
    }

    /// Last icon set rendered for a tab
    pub fn icon_for(&self, tab_id: TabId) -> Option<IconSet> {
        self.state.read().unwrap().icons.get(&tab_id).cloned()
    }

    /// Tab ids reloaded, in order
    pub fn reloads(&self) -> Vec<TabId> {
        self.state.read().unwrap().reloads.clone()
    }

    /// Number of settings reads performed
    pub fn setting_reads(&self) -> usize {
        self.state.read().unwrap().setting_reads
    }

    /// Number of settings writes accepted
    pub fn setting_writes(&self) -> usize {
        self.state.read().unwrap().setting_writes
    }
}

#[async_trait]
impl HostBrowser for MockHost {
    async fn query_active_tab(&self) -> TogglerResult<Option<Tab>> {
        let state = self.state.read().unwrap();
        Ok(state.tabs.iter().find(|t| t.active).cloned())
    }

    async fn get_tab(&self, tab_id: TabId) -> TogglerResult<Option<Tab>> {
        let state = self.state.read().unwrap();
        Ok(state.tabs.iter().find(|t| t.id == tab_id).cloned())
    }

    async fn reload_tab(&self, tab_id: TabId) -> TogglerResult<()> {
        let mut state = self.state.write().unwrap();
        if !state.tabs.iter().any(|t| t.id == tab_id) {
            return Err(TogglerError::tab_query(format!("no tab {tab_id}")));
        }
        state.reloads.push(tab_id);
        Ok(())
    }

    async fn javascript_setting(&self, url: &str) -> JsSetting {
        let mut state = self.state.write().unwrap();
        state.setting_reads += 1;

        // The real host resolves an exact URL against its stored patterns;
        // the mock gets the same granularity by deriving the pattern.
        match pattern_from_url(url) {
            Ok(pattern) => state
                .settings
                .get(&pattern)
                .copied()
                .unwrap_or(JsSetting::Default),
            Err(_) => JsSetting::Default,
        }
    }

    async fn set_javascript_setting(
        &self,
        pattern: &str,
        setting: JsSetting,
    ) -> TogglerResult<()> {
        let mut state = self.state.write().unwrap();
        if state.fail_writes {
            return Err(TogglerError::host_settings(format!(
                "injected write failure for {pattern}"
            )));
        }
        state.settings.insert(pattern.to_string(), setting);
        state.setting_writes += 1;
        Ok(())
    }

    fn set_action_icon(&self, tab_id: TabId, icons: &IconSet) {
        self.state.write().unwrap().icons.insert(tab_id, icons.clone());
    }
}
