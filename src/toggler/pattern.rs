//! URL to content-setting pattern derivation
//!
//! Content settings are keyed by pattern, one step coarser than an exact
//! URL: scheme + hostname + non-default port, with path and query
//! wildcarded away.

use url::Url;

use crate::core::{TogglerError, TogglerResult};

/// Derive the content-setting pattern for a URL.
///
/// Keeps scheme, hostname, and port (only when non-default for the scheme)
/// and wildcards the rest: `https://example.com:8443/a/b?x=1` becomes
/// `https://example.com:8443/*`.
///
/// Fails with `TogglerError::InvalidUrl` when the input does not parse or
/// has no hostname; callers must abort without writing anything.
pub fn pattern_from_url(url: &str) -> TogglerResult<String> {
    let parsed =
        Url::parse(url).map_err(|e| TogglerError::invalid_url(format!("{url}: {e}")))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| TogglerError::invalid_url(format!("{url}: no hostname")))?;

    // Url::port() is None for a scheme's default port, which is exactly
    // the omission the pattern grammar wants.
    let pattern = match parsed.port() {
        Some(port) => format!("{}://{}:{}/*", parsed.scheme(), host, port),
        None => format!("{}://{}/*", parsed.scheme(), host),
    };

    Ok(pattern)
}
