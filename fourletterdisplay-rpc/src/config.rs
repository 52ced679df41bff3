//! Device endpoint configuration

use std::time::Duration;

use fourletterdisplay_core::{CoreError, CoreResult};
use url::Url;

/// Default device address (Cleep listens on plain HTTP on the LAN)
pub const DEFAULT_URL: &str = "http://127.0.0.1:80";
/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the device URL
pub const ENV_URL: &str = "CLEEP_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "CLEEP_TIMEOUT_SECS";

/// Where and how to reach the Cleep device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    /// Base URL, always ending with `/`
    pub base_url: Url,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl RpcConfig {
    /// Parse `base_url`; only `http` and `https` are accepted.
    pub fn new(base_url: &str) -> CoreResult<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| CoreError::InvalidConfig(format!("invalid URL '{base_url}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidConfig(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from `CLEEP_URL` / `CLEEP_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(ENV_URL).unwrap_or_else(|| DEFAULT_URL.to_string());
        let mut config = Self::new(&url)?;

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                CoreError::InvalidConfig(format!("{ENV_TIMEOUT_SECS}='{raw}': {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Endpoint receiving commands
    pub fn command_url(&self) -> CoreResult<Url> {
        self.base_url
            .join("command")
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }
}
