//! Icon state derivation
//!
//! The action icon doubles as the status display: green when scripts are
//! allowed, red when blocked, gray when no explicit rule exists. The color
//! is recomputed from the setting on every render, never cached.

use serde::{Deserialize, Serialize};

use crate::core::JsSetting;

/// Icon resolutions the host expects for an action icon
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Color of the action icon, derived 1:1 from the JavaScript setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconColor {
    /// Scripts allowed
    Green,
    /// Scripts blocked
    Red,
    /// No explicit rule
    Gray,
}

impl IconColor {
    /// Map a setting to its icon color
    pub fn from_setting(setting: JsSetting) -> Self {
        match setting {
            JsSetting::Allow => IconColor::Green,
            JsSetting::Block => IconColor::Red,
            JsSetting::Default => IconColor::Gray,
        }
    }

    /// Color name as used in icon asset file names
    pub fn as_str(&self) -> &'static str {
        match self {
            IconColor::Green => "green",
            IconColor::Red => "red",
            IconColor::Gray => "gray",
        }
    }
}

impl std::fmt::Display for IconColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four resolution paths handed to the host for one icon render
///
/// Serializes to the host's `{"16": path, "32": path, ...}` map shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    #[serde(rename = "16")]
    pub px16: String,
    #[serde(rename = "32")]
    pub px32: String,
    #[serde(rename = "48")]
    pub px48: String,
    #[serde(rename = "128")]
    pub px128: String,
}

impl IconSet {
    /// Path for a given resolution, or `None` for an unsupported size
    pub fn path_for(&self, size: u32) -> Option<&str> {
        match size {
            16 => Some(&self.px16),
            32 => Some(&self.px32),
            48 => Some(&self.px48),
            128 => Some(&self.px128),
            _ => None,
        }
    }
}
