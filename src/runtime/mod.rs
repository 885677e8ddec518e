//! Event dispatch runtime
//!
//! This module provides the infrastructure that drives the toggler:
//! - `HostEvent` - Events the host browser delivers (action click, tab
//!   lifecycle, window focus)
//! - Channel helpers for feeding events in
//! - `TogglerRuntime` - Consumes events and runs one task per event
//!
//! The host binding is expected to forward its callback subscriptions into
//! the event channel once at process start; handlers share no mutable
//! state beyond the host itself.

pub mod events;
pub mod runtime;

pub use events::{create_event_channel, EventReceiver, EventSender, HostEvent, EVENT_CHANNEL_SIZE};
pub use runtime::TogglerRuntime;
