//! Host event channel definitions
//!
//! The host binding forwards its callback subscriptions into a single mpsc
//! channel; the runtime consumes it. One sender per listener registration,
//! one receiver in the runtime.

use tokio::sync::mpsc;

use crate::core::{Tab, TabId};

/// Default buffer size for the host event channel
pub const EVENT_CHANNEL_SIZE: usize = 64;

/// Events delivered by the host browser
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The user clicked the action icon while `tab` was shown. The sole
    /// entry point for toggling.
    ActionClicked(Tab),
    /// A tab changed loading state; `complete` is true once the page
    /// finished loading
    TabUpdated { tab: Tab, complete: bool },
    /// A different tab became active
    TabActivated { tab_id: TabId },
    /// Focus moved to another window
    WindowFocusChanged,
    /// A tab was closed
    TabRemoved { tab_id: TabId },
}

/// Sender half of the event channel (used by the host binding)
pub type EventSender = mpsc::Sender<HostEvent>;

/// Receiver half of the event channel (consumed by `TogglerRuntime`)
pub type EventReceiver = mpsc::Receiver<HostEvent>;

/// Create an event channel with the default buffer size
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    create_event_channel_with_size(EVENT_CHANNEL_SIZE)
}

/// Create an event channel with an explicit buffer size
pub fn create_event_channel_with_size(size: usize) -> (EventSender, EventReceiver) {
    mpsc::channel(size)
}
