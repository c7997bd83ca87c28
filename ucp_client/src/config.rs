//! Client configuration.
//!
//! Two inputs matter to every deployment: the API key and the base URL. Both
//! come from the environment (`PAYOS_API_KEY`, `PAYOS_BASE_URL`) with defaults
//! and can be overridden with explicit construction.
use std::fmt;
use std::time::Duration;

use log::warn;
use ucp_common::api::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS,
    POLL_INTERVAL_SECS, TIMEOUT_ENV, default_agent,
};
use ucp_common::{Result, UcpError};

/// Settings read once when a `SettlementClient` is built.
///
/// Custom `Debug` implementation redacts the API key.
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer credential sent in the `Authorization` header.
    pub api_key: String,
    /// Service root without a trailing `/`, e.g. `https://api.payos.com`.
    pub base_url: String,
    /// Value of the `UCP-Agent` header.
    pub agent: String,
    /// Per-request timeout enforced by the HTTP stack.
    pub request_timeout: Duration,
    /// Fixed delay between two status polls.
    pub poll_interval: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("agent", &self.agent)
            .field("request_timeout", &self.request_timeout)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration with the given credentials and default timings.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            base_url: normalize_base_url(&base_url.into()),
            agent: default_agent(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PAYOS_API_KEY` (default: `pk_test_...`)
    /// - `PAYOS_BASE_URL` (default: `https://api.payos.com`)
    /// - `PAYOS_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self> {
        let request_timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .map(|raw| parse_timeout_secs(&raw))
            .transpose()?;
        Self::resolve(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(BASE_URL_ENV).ok(),
            request_timeout,
        )
    }

    /// Builds a configuration from optional values, applying defaults for the
    /// missing ones. Used by `from_env` and the CLI.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        request_timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = match api_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => key,
            None => {
                warn!("{} is not set; using the placeholder test key", API_KEY_ENV);
                DEFAULT_API_KEY.to_string()
            }
        };
        let base_url = base_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = ClientConfig::new(api_key, base_url);
        if let Some(timeout) = request_timeout {
            config.request_timeout = timeout;
        }
        config.validate()?;
        Ok(config)
    }

    /// Overrides the `UCP-Agent` header value.
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Overrides the delay between status polls.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Rejects values the HTTP layer cannot use.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(UcpError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.api_key.is_empty() {
            return Err(UcpError::Config("API key must not be empty".into()));
        }
        Ok(())
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|e| {
        UcpError::Config(format!("{} must be a number of seconds: {}", TIMEOUT_ENV, e))
    })?;
    Ok(Duration::from_secs(secs))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
