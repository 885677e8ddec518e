//! Host browser seam
//!
//! This module provides the boundary to the host browser:
//! - `HostBrowser` - Trait over the tab, content-settings, and action-icon APIs
//! - `MockHost` - In-memory implementation for tests
//!
//! Everything durable (the setting per URL pattern) lives on the host side;
//! the trait is a thin envelope over its asynchronous calls.

pub mod browser;
pub mod mock;

pub use browser::HostBrowser;
pub use mock::MockHost;
