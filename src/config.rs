//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export IMGUR_CLIENT_ID="0123456789abcde"
//! export LISTEN="127.0.0.1:3000"
//! ```
//!
//! ## Required Variables
//!
//! - `IMGUR_CLIENT_ID` - imgur API client id, sent as `Authorization: Client-ID ...`
//!
//! ## Optional Variables
//!
//! - `IMGUR_API_BASE` - API base URL (default: `https://api.imgur.com/3`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Total timeout of the outbound call (default: 10, max: 120)
//! - `UPSTREAM_CONNECT_TIMEOUT_SECONDS` - Connect timeout (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::fmt;

use crate::infrastructure::imgur::DEFAULT_API_BASE;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// imgur API client id. Never logged.
    pub imgur_client_id: String,
    pub imgur_api_base: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub upstream_timeout_seconds: u64,
    pub upstream_connect_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `IMGUR_CLIENT_ID` is missing.
    pub fn from_env() -> Result<Self> {
        let imgur_client_id =
            env::var("IMGUR_CLIENT_ID").context("IMGUR_CLIENT_ID must be set")?;

        let imgur_api_base =
            env::var("IMGUR_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let upstream_connect_timeout_seconds = env::var("UPSTREAM_CONNECT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            imgur_client_id,
            imgur_api_base,
            listen_addr,
            log_level,
            log_format,
            upstream_timeout_seconds,
            upstream_connect_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `imgur_client_id` is empty
    /// - `imgur_api_base` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - timeouts are zero, too large, or the connect timeout exceeds the total
    pub fn validate(&self) -> Result<()> {
        if self.imgur_client_id.trim().is_empty() {
            anyhow::bail!("IMGUR_CLIENT_ID must not be empty");
        }

        if !self.imgur_api_base.starts_with("http://")
            && !self.imgur_api_base.starts_with("https://")
        {
            anyhow::bail!(
                "IMGUR_API_BASE must start with 'http://' or 'https://', got '{}'",
                self.imgur_api_base
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.upstream_timeout_seconds == 0 || self.upstream_timeout_seconds > 120 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.upstream_timeout_seconds
            );
        }

        if self.upstream_connect_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_CONNECT_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.upstream_connect_timeout_seconds > self.upstream_timeout_seconds {
            anyhow::bail!(
                "UPSTREAM_CONNECT_TIMEOUT_SECONDS ({}) must not exceed UPSTREAM_TIMEOUT_SECONDS ({})",
                self.upstream_connect_timeout_seconds,
                self.upstream_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  imgur API: {}", self.imgur_api_base);
        tracing::info!("  imgur client id: {}", mask_secret(&self.imgur_client_id));
        tracing::info!(
            "  Upstream timeout: {}s (connect {}s)",
            self.upstream_timeout_seconds,
            self.upstream_connect_timeout_seconds
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("imgur_client_id", &mask_secret(&self.imgur_client_id))
            .field("imgur_api_base", &self.imgur_api_base)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .field(
                "upstream_connect_timeout_seconds",
                &self.upstream_connect_timeout_seconds,
            )
            .finish()
    }
}

/// Masks a credential for display.
///
/// Only reports whether a value is set: `***` or `<unset>`.
fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "***" }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
