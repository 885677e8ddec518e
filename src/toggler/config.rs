//! Toggler configuration
//!
//! Use the builder pattern to configure the toggler:
//!
//! ```ignore
//! let config = TogglerConfig::new()
//!     .with_icon_prefix("js_toggle")
//!     .with_icon_dir("assets/icons")
//!     .with_privileged_scheme("edge://");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::TogglerResult;

use super::icon::{IconColor, IconSet};

/// Default buffer size for the host event channel
const DEFAULT_EVENT_CHANNEL_SIZE: usize = 64;

/// Configuration for a `SiteScriptToggler`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TogglerConfig {
    /// File-name prefix of the icon assets (`{prefix}_{color}{size}.png`)
    pub icon_prefix: String,

    /// Directory the icon paths are resolved against; paths stay relative
    /// when unset
    pub icon_dir: Option<PathBuf>,

    /// URL prefixes of host-internal pages that must never be queried or
    /// toggled (the host forbids content-setting introspection on them)
    pub privileged_schemes: Vec<String>,

    /// Buffer size for the host event channel
    pub event_channel_size: usize,
}

impl Default for TogglerConfig {
    fn default() -> Self {
        Self {
            icon_prefix: "icon".to_string(),
            icon_dir: None,
            privileged_schemes: vec![
                "chrome://".to_string(),
                "chrome-extension://".to_string(),
            ],
            event_channel_size: DEFAULT_EVENT_CHANNEL_SIZE,
        }
    }
}

impl TogglerConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> TogglerResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Set the icon asset prefix
    pub fn with_icon_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.icon_prefix = prefix.into();
        self
    }

    /// Set the icon asset directory
    pub fn with_icon_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.icon_dir = Some(dir.into());
        self
    }

    /// Add a privileged URL prefix
    pub fn with_privileged_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.privileged_schemes.push(scheme.into());
        self
    }

    /// Set the event channel buffer size
    pub fn with_event_channel_size(mut self, size: usize) -> Self {
        self.event_channel_size = size;
        self
    }

    /// Whether a URL belongs to a host-internal page
    pub fn is_privileged_url(&self, url: &str) -> bool {
        self.privileged_schemes
            .iter()
            .any(|scheme| url.starts_with(scheme.as_str()))
    }

    /// Build the icon set for one color, e.g. `icon_green16.png` through
    /// `icon_green128.png`
    pub fn icon_set(&self, color: IconColor) -> IconSet {
        let path = |size: u32| {
            let name = format!("{}_{}{}.png", self.icon_prefix, color, size);
            match &self.icon_dir {
                Some(dir) => dir.join(name).to_string_lossy().into_owned(),
                None => name,
            }
        };

        IconSet {
            px16: path(16),
            px32: path(32),
            px48: path(48),
            px128: path(128),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = TogglerConfig::default();
        assert_eq!(config.icon_prefix, "icon");
        assert!(config.icon_dir.is_none());
        assert_eq!(config.event_channel_size, DEFAULT_EVENT_CHANNEL_SIZE);
        assert!(config.is_privileged_url("chrome://settings/"));
        assert!(config.is_privileged_url("chrome-extension://abcdef/popup.html"));
        assert!(!config.is_privileged_url("https://example.com/"));
    }

    #[test]
    fn test_config_builder() {
        let config = TogglerConfig::new()
            .with_icon_prefix("js")
            .with_icon_dir("assets")
            .with_privileged_scheme("edge://")
            .with_event_channel_size(8);

        assert_eq!(config.icon_prefix, "js");
        assert_eq!(config.event_channel_size, 8);
        assert!(config.is_privileged_url("edge://flags/"));
        // Defaults are kept when adding a scheme
        assert!(config.is_privileged_url("chrome://settings/"));
    }

    #[test]
    fn test_icon_set_naming() {
        let config = TogglerConfig::default();
        let icons = config.icon_set(IconColor::Red);
        assert_eq!(icons.px16, "icon_red16.png");
        assert_eq!(icons.px128, "icon_red128.png");

        let config = config.with_icon_dir("assets/icons");
        let icons = config.icon_set(IconColor::Green);
        assert_eq!(icons.px48, "assets/icons/icon_green48.png");
    }

    #[test]
    fn test_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"icon_prefix": "custom", "privileged_schemes": ["about:"]}}"#
        )
        .unwrap();

        let config = TogglerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.icon_prefix, "custom");
        assert!(config.is_privileged_url("about:blank"));
        // Unspecified fields fall back to defaults
        assert_eq!(config.event_channel_size, DEFAULT_EVENT_CHANNEL_SIZE);
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = TogglerConfig::from_file("/nonexistent/toggler.json");
        assert!(matches!(result, Err(crate::core::TogglerError::Io(_))));
    }
}
