//! Core types for the toggle service
//!
//! This module provides the fundamental types used throughout the crate:
//! - `Tab` / `TabId` - Host tab identity
//! - `JsSetting` - Per-site JavaScript content setting
//! - `TogglerError` - Error types

pub mod error;
pub mod types;

pub use error::{TogglerError, TogglerResult};
pub use types::{JsSetting, Tab, TabId};
