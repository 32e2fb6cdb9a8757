//! Runtime configuration loaded from environment variables.
//!
//! Every variable is optional; an `.env` file in the working directory is
//! honoured (loaded via `dotenvy::dotenv()` in `main.rs`).
//!
//! ## Variables
//!
//! - `POKEAPI_BASE_URL` - API root (default: `https://pokeapi.co/api/v2`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout, 1–300 (default: `20`)
//! - `OUTPUT_DIR` - Directory receiving `{name}.html` (default: `.`)
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::utils::resource_url::parse_resource_url;

const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_seconds: u64,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            output_dir: PathBuf::from("."),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_TIMEOUT_SECONDS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("POKEAPI_BASE_URL").unwrap_or(defaults.api_base_url);

        let request_timeout_seconds = match env::var("HTTP_TIMEOUT_SECONDS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("HTTP_TIMEOUT_SECONDS must be a number, got '{}'", v))?,
            Err(_) => defaults.request_timeout_seconds,
        };

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            api_base_url,
            request_timeout_seconds,
            output_dir,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an absolute http(s) URL
    /// - `request_timeout_seconds` is 0 or above 300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        parse_resource_url(&self.api_base_url).with_context(|| {
            format!(
                "POKEAPI_BASE_URL must be an absolute http(s) URL, got '{}'",
                self.api_base_url
            )
        })?;

        if self.request_timeout_seconds == 0 || self.request_timeout_seconds > MAX_TIMEOUT_SECONDS {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECONDS,
                self.request_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  API base URL: {}", self.api_base_url);
        tracing::debug!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::debug!("  Output directory: {}", self.output_dir.display());
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
