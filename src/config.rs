//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before anything
//! touches the map file or the catalog.
//!
//! ## Variables
//!
//! - `CLIPNAV_MAP_FILE` - Path to the domain map JSON file (default: `domainmap.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CATALOG_URL` - Site catalog endpoint; required only for `map sync`
//! - `CATALOG_SECRET` - Signing secret for the catalog API; required only for `map sync`
//! - `CATALOG_TIMEOUT_SECONDS` - Catalog request timeout (default: 10)

use anyhow::Result;
use std::env;

/// Tool configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub map_file: String,
    pub log_level: String,
    pub log_format: String,
    /// Site catalog endpoint. `map sync` refuses to run without it.
    pub catalog_url: Option<String>,
    /// Shared secret signing catalog requests.
    pub catalog_secret: Option<String>,
    /// Catalog request timeout in seconds.
    pub catalog_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let map_file = env::var("CLIPNAV_MAP_FILE").unwrap_or_else(|_| "domainmap.json".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let catalog_url = env::var("CATALOG_URL").ok().filter(|v| !v.is_empty());
        let catalog_secret = env::var("CATALOG_SECRET").ok().filter(|v| !v.is_empty());

        let catalog_timeout = env::var("CATALOG_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            map_file,
            log_level,
            log_format,
            catalog_url,
            catalog_secret,
            catalog_timeout,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `CLIPNAV_MAP_FILE` is empty
    /// - `CATALOG_URL` is present but not an http(s) URL
    /// - `CATALOG_TIMEOUT_SECONDS` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.map_file.is_empty() {
            anyhow::bail!("CLIPNAV_MAP_FILE must not be empty");
        }

        if let Some(ref url) = self.catalog_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            anyhow::bail!(
                "CATALOG_URL must start with 'http://' or 'https://', got '{}'",
                url
            );
        }

        if self.catalog_timeout == 0 {
            anyhow::bail!("CATALOG_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether catalog sync is configured.
    pub fn is_sync_configured(&self) -> bool {
        self.catalog_url.is_some() && self.catalog_secret.is_some()
    }

    /// Prints configuration summary (without the signing secret).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Map file: {}", self.map_file);

        if let Some(ref url) = self.catalog_url {
            tracing::info!("  Catalog: {} (sync enabled)", url);
        } else {
            tracing::info!("  Catalog: not configured");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
