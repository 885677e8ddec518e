//! SiteScriptToggler - Orchestration between host events and host APIs
//!
//! The toggler reads a site's JavaScript setting, flips and persists it,
//! reloads the tab, and keeps the action icon in step. Every invocation is
//! independent; there is no per-tab locking. Overlapping operations can
//! leave a momentarily stale icon, which the next sync recomputes from the
//! authoritative host store.

use std::sync::Arc;

use crate::core::{JsSetting, Tab, TabId, TogglerResult};
use crate::host::HostBrowser;

use super::config::TogglerConfig;
use super::icon::IconColor;
use super::pattern::pattern_from_url;

/// Toggles JavaScript execution per site and mirrors the state onto the
/// action icon
pub struct SiteScriptToggler {
    host: Arc<dyn HostBrowser>,
    config: TogglerConfig,
}

impl SiteScriptToggler {
    /// Create a toggler with the default configuration
    pub fn new(host: Arc<dyn HostBrowser>) -> Self {
        Self::with_config(host, TogglerConfig::default())
    }

    /// Create a toggler with an explicit configuration
    pub fn with_config(host: Arc<dyn HostBrowser>, config: TogglerConfig) -> Self {
        Self { host, config }
    }

    /// The active configuration
    pub fn config(&self) -> &TogglerConfig {
        &self.config
    }

    /// The tab that is active in the currently focused window, if any
    pub async fn current_active_tab(&self) -> TogglerResult<Option<Tab>> {
        self.host.query_active_tab().await
    }

    /// The JavaScript setting in effect for a URL; unset resolves to
    /// `Default`
    pub async fn read_setting(&self, url: &str) -> JsSetting {
        self.host.javascript_setting(url).await
    }

    /// Persist a setting for every URL matching `pattern`
    pub async fn write_setting(&self, pattern: &str, setting: JsSetting) -> TogglerResult<()> {
        self.host.set_javascript_setting(pattern, setting).await
    }

    /// Push the icon derived from `setting` onto a tab's action button
    pub fn render_icon(&self, tab_id: TabId, setting: JsSetting) {
        let color = IconColor::from_setting(setting);
        tracing::debug!(tab_id, setting = %setting, color = %color, "rendering action icon");
        self.host.set_action_icon(tab_id, &self.config.icon_set(color));
    }

    /// Recompute the icon for a tab from the host settings store.
    ///
    /// Absent tabs, tabs without a URL, and privileged host pages are
    /// skipped without touching the settings store; the host forbids
    /// introspection on its internal pages.
    pub async fn sync_icon_for_tab(&self, tab: Option<&Tab>) {
        let Some(tab) = tab else { return };
        let Some(url) = tab.url.as_deref() else { return };

        if self.config.is_privileged_url(url) {
            tracing::debug!(tab_id = tab.id, url, "skipping privileged page");
            return;
        }

        let setting = self.read_setting(url).await;
        self.render_icon(tab.id, setting);
    }

    /// Look up a tab by id and sync its icon
    pub async fn sync_icon_for_tab_id(&self, tab_id: TabId) -> TogglerResult<()> {
        let tab = self.host.get_tab(tab_id).await?;
        self.sync_icon_for_tab(tab.as_ref()).await;
        Ok(())
    }

    /// Sync the icon of whichever tab currently has focus
    pub async fn sync_active_tab(&self) -> TogglerResult<()> {
        let tab = self.current_active_tab().await?;
        self.sync_icon_for_tab(tab.as_ref()).await;
        Ok(())
    }

    /// Flip the JavaScript setting for the site shown in `tab`.
    ///
    /// Each step gates the next: pattern derivation, read, write, icon,
    /// reload. The write must land before anything visible changes, so a
    /// rejected write leaves the icon and the tab untouched. Tabs without
    /// a URL are rejected silently.
    pub async fn toggle_for_tab(&self, tab: Option<&Tab>) -> TogglerResult<()> {
        let Some(tab) = tab else { return Ok(()) };
        let Some(url) = tab.url.as_deref() else {
            tracing::debug!(tab_id = tab.id, "tab has no URL, nothing to toggle");
            return Ok(());
        };

        let pattern = pattern_from_url(url)?;
        let current = self.read_setting(url).await;
        let next = current.toggled();

        tracing::info!(tab_id = tab.id, %pattern, from = %current, to = %next, "toggling javascript");
        self.write_setting(&pattern, next).await?;
        self.render_icon(tab.id, next);
        self.host.reload_tab(tab.id).await?;

        Ok(())
    }
}

impl std::fmt::Debug for SiteScriptToggler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteScriptToggler")
            .field("config", &self.config)
            .finish()
    }
}
