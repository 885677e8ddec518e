//! TogglerRuntime - Dispatches host events onto the toggler
//!
//! The `TogglerRuntime` is responsible for:
//! - Consuming the host event channel
//! - Running each event as its own tokio task
//! - Catching and logging every handler error at the boundary
//!
//! Events on the same tab are deliberately not serialized. A toggle racing
//! a sync can paint a stale icon for a moment; the host settings store
//! stays authoritative and the next sync event recomputes the icon.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::host::HostBrowser;
use crate::toggler::{SiteScriptToggler, TogglerConfig};

use super::events::{create_event_channel_with_size, EventReceiver, EventSender, HostEvent};

/// Runtime that drives a `SiteScriptToggler` from host events
#[derive(Clone)]
pub struct TogglerRuntime {
    toggler: Arc<SiteScriptToggler>,
}

impl TogglerRuntime {
    /// Create a runtime with the default configuration
    pub fn new(host: Arc<dyn HostBrowser>) -> Self {
        Self::with_config(host, TogglerConfig::default())
    }

    /// Create a runtime with an explicit configuration
    pub fn with_config(host: Arc<dyn HostBrowser>, config: TogglerConfig) -> Self {
        Self {
            toggler: Arc::new(SiteScriptToggler::with_config(host, config)),
        }
    }

    /// The underlying toggler
    pub fn toggler(&self) -> &Arc<SiteScriptToggler> {
        &self.toggler
    }

    /// Create an event channel sized from the configuration
    pub fn event_channel(&self) -> (EventSender, EventReceiver) {
        create_event_channel_with_size(self.toggler.config().event_channel_size)
    }

    /// Consume events until every sender is dropped.
    ///
    /// Each event runs in its own spawned task so a suspended host call
    /// (settings write, tab reload) never blocks later events.
    pub async fn run(&self, mut events: EventReceiver) {
        tracing::info!("toggler runtime started");

        while let Some(event) = events.recv().await {
            let toggler = self.toggler.clone();
            tokio::spawn(async move {
                handle_event(&toggler, event).await;
            });
        }

        tracing::info!("toggler runtime stopped");
    }

    /// Spawn `run` as a background task
    pub fn spawn(&self, events: EventReceiver) -> JoinHandle<()> {
        let runtime = self.clone();
        tokio::spawn(async move { runtime.run(events).await })
    }
}

impl std::fmt::Debug for TogglerRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogglerRuntime").finish()
    }
}

/// One event, one task. Errors stop here: they are logged and leave every
/// other in-flight or future event unaffected. There is no retry; a failed
/// toggle waits for the next click.
async fn handle_event(toggler: &SiteScriptToggler, event: HostEvent) {
    match event {
        HostEvent::ActionClicked(tab) => {
            if let Err(e) = toggler.toggle_for_tab(Some(&tab)).await {
                tracing::error!(tab_id = tab.id, error = %e, "toggle failed");
            }
        }
        HostEvent::TabUpdated { tab, complete } => {
            if complete && tab.active {
                toggler.sync_icon_for_tab(Some(&tab)).await;
            }
        }
        HostEvent::TabActivated { tab_id } => {
            if let Err(e) = toggler.sync_icon_for_tab_id(tab_id).await {
                tracing::error!(tab_id, error = %e, "icon sync failed");
            }
        }
        HostEvent::WindowFocusChanged => {
            if let Err(e) = toggler.sync_active_tab().await {
                tracing::error!(error = %e, "active-tab sync failed");
            }
        }
        HostEvent::TabRemoved { tab_id } => {
            // Nothing to clean up; the host drops per-tab icon state itself
            tracing::debug!(tab_id, "tab removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{JsSetting, Tab};
    use crate::host::MockHost;
    use crate::runtime::events::create_event_channel;
    use crate::toggler::IconColor;

    async fn settle() {
        // Let spawned handler tasks run to completion
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_action_click_toggles_and_reloads() {
        let host = Arc::new(MockHost::with_tabs(vec![Tab::new(
            1,
            "https://example.com/",
        )]));
        let runtime = TogglerRuntime::new(host.clone());
        let (tx, rx) = create_event_channel();
        let handle = runtime.spawn(rx);

        tx.send(HostEvent::ActionClicked(Tab::new(1, "https://example.com/")))
            .await
            .unwrap();
        settle().await;

        assert_eq!(
            host.stored_setting("https://example.com/*"),
            Some(JsSetting::Block)
        );
        assert_eq!(host.reloads(), vec![1]);

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_tab_updated_syncs_only_completed_active_tabs() {
        let host = Arc::new(MockHost::new());
        host.seed_setting("https://example.com/*", JsSetting::Allow);
        let runtime = TogglerRuntime::new(host.clone());
        let (tx, rx) = create_event_channel();
        runtime.spawn(rx);

        // Still loading: ignored
        tx.send(HostEvent::TabUpdated {
            tab: Tab::new(1, "https://example.com/"),
            complete: false,
        })
        .await
        .unwrap();

        // Complete but background: ignored
        tx.send(HostEvent::TabUpdated {
            tab: Tab::new(2, "https://example.com/").with_active(false),
            complete: true,
        })
        .await
        .unwrap();

        // Complete and active: synced
        tx.send(HostEvent::TabUpdated {
            tab: Tab::new(3, "https://example.com/"),
            complete: true,
        })
        .await
        .unwrap();
        settle().await;

        assert!(host.icon_for(1).is_none());
        assert!(host.icon_for(2).is_none());
        assert_eq!(
            host.icon_for(3),
            Some(TogglerConfig::default().icon_set(IconColor::Green))
        );
        assert_eq!(host.setting_reads(), 1);
    }

    #[tokio::test]
    async fn test_tab_activated_looks_up_and_syncs() {
        let host = Arc::new(MockHost::with_tabs(vec![Tab::new(
            7,
            "https://example.org/",
        )]));
        host.seed_setting("https://example.org/*", JsSetting::Block);
        let runtime = TogglerRuntime::new(host.clone());
        let (tx, rx) = create_event_channel();
        runtime.spawn(rx);

        tx.send(HostEvent::TabActivated { tab_id: 7 }).await.unwrap();
        settle().await;

        assert_eq!(
            host.icon_for(7),
            Some(TogglerConfig::default().icon_set(IconColor::Red))
        );
    }

    #[tokio::test]
    async fn test_window_focus_syncs_active_tab() {
        let host = Arc::new(MockHost::with_tabs(vec![
            Tab::new(1, "https://a.example/").with_active(false),
            Tab::new(2, "https://b.example/"),
        ]));
        let runtime = TogglerRuntime::new(host.clone());
        let (tx, rx) = create_event_channel();
        runtime.spawn(rx);

        tx.send(HostEvent::WindowFocusChanged).await.unwrap();
        settle().await;

        assert!(host.icon_for(1).is_none());
        assert_eq!(
            host.icon_for(2),
            Some(TogglerConfig::default().icon_set(IconColor::Gray))
        );
    }

    #[tokio::test]
    async fn test_failed_toggle_does_not_stop_the_loop() {
        let host = Arc::new(MockHost::with_tabs(vec![Tab::new(
            1,
            "https://example.com/",
        )]));
        host.fail_writes(true);
        let runtime = TogglerRuntime::new(host.clone());
        let (tx, rx) = create_event_channel();
        runtime.spawn(rx);

        tx.send(HostEvent::ActionClicked(Tab::new(1, "https://example.com/")))
            .await
            .unwrap();
        settle().await;
        assert!(host.reloads().is_empty());

        // The loop keeps serving events after the failure
        host.fail_writes(false);
        tx.send(HostEvent::ActionClicked(Tab::new(1, "https://example.com/")))
            .await
            .unwrap();
        settle().await;

        assert_eq!(
            host.stored_setting("https://example.com/*"),
            Some(JsSetting::Block)
        );
        assert_eq!(host.reloads(), vec![1]);
    }

    #[tokio::test]
    async fn test_tab_removed_is_a_noop() {
        let host = Arc::new(MockHost::new());
        let runtime = TogglerRuntime::new(host.clone());
        let (tx, rx) = create_event_channel();
        let handle = runtime.spawn(rx);

        tx.send(HostEvent::TabRemoved { tab_id: 12 }).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        assert_eq!(host.setting_reads(), 0);
        assert_eq!(host.setting_writes(), 0);
    }

    #[tokio::test]
    async fn test_runtime_stops_when_senders_drop() {
        let host = Arc::new(MockHost::new());
        let runtime = TogglerRuntime::new(host);
        let (tx, rx) = create_event_channel();
        let handle = runtime.spawn(rx);

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_event_channel_uses_configured_size() {
        let host = Arc::new(MockHost::new());
        let runtime =
            TogglerRuntime::with_config(host, TogglerConfig::default().with_event_channel_size(2));
        let (tx, _rx) = runtime.event_channel();

        assert_eq!(tx.max_capacity(), 2);
    }
}
