//! The per-site JavaScript toggler
//!
//! This module holds the whole toggle pipeline:
//! - `pattern` - URL to content-setting pattern derivation
//! - `icon` - Setting to icon-color mapping and icon asset sets
//! - `TogglerConfig` - Icon naming, privileged schemes, channel sizing
//! - `SiteScriptToggler` - Orchestration between host events and host APIs
//!
//! The toggler owns no state of its own. The host settings store is the
//! single source of truth; every icon render recomputes from it.

pub mod config;
pub mod icon;
pub mod pattern;
pub mod toggler;

pub use config::TogglerConfig;
pub use icon::{IconColor, IconSet, ICON_SIZES};
pub use pattern::pattern_from_url;
pub use toggler::SiteScriptToggler;
