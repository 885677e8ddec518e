//! HostBrowser trait
//!
//! Abstracts the host browser's extension APIs so the toggle logic can run
//! against any binding (a real extension bridge, or the in-memory mock in
//! tests) interchangeably.

use async_trait::async_trait;

use crate::core::{JsSetting, Tab, TabId, TogglerResult};
use crate::toggler::IconSet;

/// Trait over the host browser APIs the toggler consumes.
///
/// Implementations must be shareable across tasks; multiple event handlers
/// may call in concurrently and the host is expected to keep each settings
/// write atomic on its side.
#[async_trait]
pub trait HostBrowser: Send + Sync {
    /// The tab that is both active and in the currently focused window,
    /// if the host reports one.
    async fn query_active_tab(&self) -> TogglerResult<Option<Tab>>;

    /// Look up a tab by id. `None` when the tab no longer exists.
    async fn get_tab(&self, tab_id: TabId) -> TogglerResult<Option<Tab>>;

    /// Reload a tab.
    async fn reload_tab(&self, tab_id: TabId) -> TogglerResult<()>;

    /// The JavaScript setting in effect for an exact URL.
    ///
    /// Infallible by the host envelope contract: an unset or unreadable
    /// setting resolves to `JsSetting::Default`.
    async fn javascript_setting(&self, url: &str) -> JsSetting;

    /// Persist a JavaScript setting for every URL matching `pattern`.
    ///
    /// Fails with `TogglerError::HostSettings` when the host rejects the
    /// write (invalid pattern, denied permission).
    async fn set_javascript_setting(
        &self,
        pattern: &str,
        setting: JsSetting,
    ) -> TogglerResult<()>;

    /// Set the action icon for a tab. Fire-and-forget dispatch; the host
    /// reports no outcome.
    fn set_action_icon(&self, tab_id: TabId, icons: &IconSet);
}
