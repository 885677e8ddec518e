//! Toggle service error types

use thiserror::Error;

/// Errors that can occur while toggling or syncing a site
#[derive(Error, Debug)]
pub enum TogglerError {
    /// URL could not be parsed into a content-setting pattern
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The host rejected a content-settings write
    #[error("Host settings write failed: {0}")]
    HostSettings(String),

    /// A tab query, lookup, or reload failed on the host side
    #[error("Tab operation failed: {0}")]
    TabQuery(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl TogglerError {
    /// Create an invalid-URL error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        TogglerError::InvalidUrl(msg.into())
    }

    /// Create a host-settings error
    pub fn host_settings(msg: impl Into<String>) -> Self {
        TogglerError::HostSettings(msg.into())
    }

    /// Create a tab-operation error
    pub fn tab_query(msg: impl Into<String>) -> Self {
        TogglerError::TabQuery(msg.into())
    }
}

/// Result type alias for toggle operations
pub type TogglerResult<T> = Result<T, TogglerError>;
