//! Process configuration.
//!
//! All settings are read from the environment exactly once at startup and
//! carried in an explicit struct; nothing else in the crate touches the
//! environment.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9090";
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

/// Settings the gateway needs to run.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the upstream Spektr endpoint.
    pub upstream_base_url: Url,
    /// Per-request timeout for upstream calls.
    pub upstream_timeout: Duration,
    /// Key for the bearer-token codec.
    pub token_key: String,
}

/// Reasons the configuration cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `SERVER_ADDRESS` is not a socket address.
    #[error("SERVER_ADDRESS is not a valid socket address: {value}")]
    InvalidBindAddr {
        /// Rejected value.
        value: String,
    },
    /// `UPSTREAM_BASE_URL` is missing.
    #[error("UPSTREAM_BASE_URL must be set")]
    MissingBaseUrl,
    /// `UPSTREAM_BASE_URL` is not a URL.
    #[error("UPSTREAM_BASE_URL is not a valid URL: {value}")]
    InvalidBaseUrl {
        /// Rejected value.
        value: String,
    },
    /// `TOKEN_KEY` is missing or empty.
    #[error("TOKEN_KEY must be set and non-empty")]
    MissingTokenKey,
}

impl GatewayConfig {
    /// Assemble the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required variable is missing or a
    /// value does not parse. An unparseable timeout falls back to the
    /// default with a warning rather than failing startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_value = lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_value
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr { value: bind_value })?;

        let url_value = lookup("UPSTREAM_BASE_URL").ok_or(ConfigError::MissingBaseUrl)?;
        let upstream_base_url =
            Url::parse(&url_value).map_err(|_| ConfigError::InvalidBaseUrl { value: url_value })?;

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECONDS")
            .map_or(DEFAULT_UPSTREAM_TIMEOUT_SECONDS, |value| {
                value.parse().unwrap_or_else(|_| {
                    warn!(value = %value, "failed to parse upstream timeout, using default");
                    DEFAULT_UPSTREAM_TIMEOUT_SECONDS
                })
            });

        let token_key = lookup("TOKEN_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingTokenKey)?;

        Ok(Self {
            bind_addr,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(upstream_timeout),
            token_key,
        })
    }
}
