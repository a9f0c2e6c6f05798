//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DOCS_BASE_URL="https://docs.example.com/"
//! export ICON_BASE_PATH="/static/icons"
//! export HELP_CATALOG_FILE="./help-links.json"   # optional
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DOCS_BASE_URL` - Documentation root (default: the project docs on GitHub)
//! - `ICON_BASE_PATH` - URL prefix for icon assets (default: `/static/icons`)
//! - `HELP_CATALOG_FILE` - JSON file replacing the built-in link catalog

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Documentation root used when `DOCS_BASE_URL` is not set.
pub const DEFAULT_DOCS_BASE_URL: &str =
    "https://github.com/awslabs/amazon-s3-find-and-forget/blob/master/docs/";

/// Icon asset prefix used when `ICON_BASE_PATH` is not set.
pub const DEFAULT_ICON_BASE_PATH: &str = "/static/icons";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Absolute URL that relative documentation paths are joined onto.
    pub docs_base_url: String,
    pub icon_base_path: String,
    /// When set, the link catalog is read from this file instead of the
    /// built-in Deletion Queue links.
    pub catalog_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            icon_base_path: DEFAULT_ICON_BASE_PATH.to_string(),
            catalog_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable is optional; unset or empty variables fall back to
    /// [`Config::default`].
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: var_or("LISTEN", defaults.listen_addr),
            log_level: var_or("RUST_LOG", defaults.log_level),
            log_format: var_or("LOG_FORMAT", defaults.log_format),
            docs_base_url: var_or("DOCS_BASE_URL", defaults.docs_base_url),
            icon_base_path: var_or("ICON_BASE_PATH", defaults.icon_base_path),
            catalog_file: env::var("HELP_CATALOG_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `docs_base_url` is not an `http://` or `https://` URL
    /// - `icon_base_path` is empty
    pub fn validate(&self) -> Result<()> {
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

        self.validate_content()
    }

    /// Validates only the settings that shape the rendered help content.
    ///
    /// Used by tools that render the panel without running the server.
    ///
    /// # Errors
    ///
    /// Returns an error if `docs_base_url` is not an `http://` or `https://` URL
    /// or `icon_base_path` is empty.
    pub fn validate_content(&self) -> Result<()> {
        if !self.docs_base_url.starts_with("http://") && !self.docs_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "DOCS_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.docs_base_url
            );
        }

        if self.icon_base_path.trim().is_empty() {
            anyhow::bail!("ICON_BASE_PATH must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Docs base URL: {}", self.docs_base_url);
        tracing::info!("  Icon base path: {}", self.icon_base_path);

        match &self.catalog_file {
            Some(path) => tracing::info!("  Link catalog: {}", path.display()),
            None => tracing::info!("  Link catalog: built-in"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
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
