//! Application configuration.
//!
//! Precedence is CLI flags over environment over defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliOverrides;

/// Default host serving the report document.
pub const DEFAULT_BASE_URL: &str = "https://android-interview.s3.eu-west-2.amazonaws.com/";

/// Path of the report document under the base URL.
pub const DEFAULT_ENDPOINT_PATH: &str = "endpoint.json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_BASE_URL: &str = "CREDITSCORE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CREDITSCORE_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "CREDITSCORE_LOG_FILE";

/// Runtime configuration for the report client and logging.
///
/// # Example
///
/// ```
/// use creditscore::config::AppConfig;
/// use std::time::Duration;
///
/// let config = AppConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_request_timeout(Duration::from_secs(2));
/// assert_eq!(config.endpoint_url(), "http://localhost:8080/endpoint.json");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scheme and host (optionally a path prefix) of the report server
    pub base_url: String,
    /// Document path appended to `base_url`
    pub endpoint_path: String,
    /// Timeout for the whole request
    pub request_timeout: Duration,
    /// Log file override; `None` uses the cache directory
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = path.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Build a config from the process environment.
    ///
    /// Unset, empty or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
        {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        config
    }

    /// Apply command-line overrides on top of this config.
    pub fn apply_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.base_url {
            self.base_url = url.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Full URL of the report document, joined with exactly one `/`.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}
