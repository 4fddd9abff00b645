//! Configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs. A `.env` file in the working directory is honored (loaded by the
//! binary through `dotenvy`).
//!
//! ## Variables
//!
//! - `SEO_SITE_URL` - Base URL for canonical links (default: `https://personalwings.com`)
//! - `SEO_DEFAULT_PATH` - Path used when a command gets none (optional, must start with `/`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

use crate::application::services::DEFAULT_SITE_URL;
use crate::utils::url_normalizer::validate_site_url;

/// Generator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub site_url: String,
    pub default_path: Option<String>,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            default_path: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let site_url = env::var("SEO_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
        let default_path = env::var("SEO_DEFAULT_PATH").ok().filter(|p| !p.is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            site_url,
            default_path,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `site_url` is not an absolute `http`/`https` URL
    /// - `default_path` does not start with `/`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        validate_site_url(&self.site_url)
            .with_context(|| format!("SEO_SITE_URL is invalid: '{}'", self.site_url))?;

        if let Some(ref path) = self.default_path
            && !path.starts_with('/')
        {
            anyhow::bail!("SEO_DEFAULT_PATH must start with '/', got '{}'", path);
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Site URL: {}", self.site_url);
        match self.default_path {
            Some(ref path) => tracing::info!("  Default path: {}", path),
            None => tracing::info!("  Default path: none"),
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
/// (e.g., via `dotenvy::dotenv()` in the binary).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
