//! Structured logging setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` directives take precedence; `default_level` applies when it is
/// unset. `format` is `json` for one JSON object per line, anything else for
/// human-readable text.
pub fn init_logging(default_level: &str, format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
    }
}
