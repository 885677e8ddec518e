//! Tab identity and the JavaScript content setting

use serde::{Deserialize, Serialize};

/// Host-assigned tab identifier
pub type TabId = i32;

/// JavaScript content setting for a site
///
/// Mirrors the host's wire values (`allow`, `block`, `default`). The host
/// settings store owns the effective value per URL pattern; this type is
/// only the in-flight representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsSetting {
    /// Scripts run on matching pages
    Allow,
    /// Scripts are blocked on matching pages
    Block,
    /// No explicit rule; the host's global default applies
    Default,
}

impl JsSetting {
    /// Wire string as the host reports it
    pub fn as_str(&self) -> &'static str {
        match self {
            JsSetting::Allow => "allow",
            JsSetting::Block => "block",
            JsSetting::Default => "default",
        }
    }

    /// Resolve a host-reported value, treating anything missing or
    /// unrecognized as `Default`
    pub fn from_host(value: Option<&str>) -> Self {
        match value {
            Some("allow") => JsSetting::Allow,
            Some("block") => JsSetting::Block,
            _ => JsSetting::Default,
        }
    }

    /// The setting a toggle flips to.
    ///
    /// `Block` flips to `Allow`; both `Allow` and `Default` flip to `Block`.
    /// Toggling a site with no explicit rule blocks it first.
    pub fn toggled(self) -> JsSetting {
        match self {
            JsSetting::Block => JsSetting::Allow,
            JsSetting::Allow | JsSetting::Default => JsSetting::Block,
        }
    }
}

impl std::fmt::Display for JsSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host browser tab, as delivered in tab events and query results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Host-assigned id, stable for the tab's lifetime
    pub id: TabId,
    /// Current URL; absent for tabs the host withholds it from
    pub url: Option<String>,
    /// Whether this tab is the active one in its window
    pub active: bool,
}

impl Tab {
    /// Create an active tab with a URL
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: Some(url.into()),
            active: true,
        }
    }

    /// Create a tab without a URL (e.g., the host withheld it)
    pub fn without_url(id: TabId) -> Self {
        Self {
            id,
            url: None,
            active: true,
        }
    }

    /// Set the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
