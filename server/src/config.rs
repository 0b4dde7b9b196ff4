//! Page-host configuration from the environment.
//!
//! DESIGN
//! ======
//! Parsing works over a lookup closure so tests never mutate the process
//! environment. `from_env` is the only caller that reads real variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:7070";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid TASKBOARD_API_UPSTREAM (expected an http(s) URL): {0:?}")]
    InvalidUpstream(String),
    #[error("invalid TASKBOARD_UPSTREAM_TIMEOUT_SECS (expected a positive integer): {0:?}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen port.
    pub port: u16,
    /// Origin of the task backend, without trailing slash.
    pub api_upstream: String,
    pub upstream_timeout: Duration,
}

impl ServerConfig {
    /// Load from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source. Unset and blank variables
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_upstream = var("TASKBOARD_API_UPSTREAM").unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned());
        let has_scheme = api_upstream.starts_with("http://") || api_upstream.starts_with("https://");
        let api_upstream = api_upstream.trim_end_matches('/').to_owned();
        if !has_scheme || api_upstream.ends_with(':') || api_upstream.ends_with("//") {
            return Err(ConfigError::InvalidUpstream(api_upstream));
        }

        let timeout_secs = match var("TASKBOARD_UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self { port, api_upstream, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}
