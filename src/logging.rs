//! Logging initialization
//!
//! Console logging filtered through `RUST_LOG`, with an optional
//! file-backed variant for long-lived embeddings. Call exactly one of the
//! init functions, once, at process start.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize console logging.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

/// Initialize logging into a daily-rolled file under `dir`.
///
/// Returns the appender guard; it must stay alive for the lifetime of the
/// process, and dropping it flushes the background writer.
pub fn init_file_logging(dir: impl AsRef<Path>) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(dir.as_ref(), "site-script-toggle.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(guard)
}
