//! Client configuration.
//!
//! [`ClientConfig::from_env`] is the only place the SDK reads the process
//! environment. Call it once at startup and pass the result to
//! [`NeuronLabApiClient::from_config`](crate::api::NeuronLabApiClient::from_config).

use std::fmt;
use std::time::Duration;

use crate::api::error::{ApiError, ApiResult};
use crate::network::{
    AUTH_TOKEN_ENV_VAR, DEFAULT_MAX_TRIES, DEFAULT_TIMEOUT_SECS, MAX_TRIES_ENV_VAR,
    PROXY_ENV_VAR, TIMEOUT_ENV_VAR, URL_ENV_VAR,
};

/// Connection settings for the NeuronLab API.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    auth_token: String,
    base_url: String,
    proxy: Option<String>,
    max_tries: u32,
    timeout: Duration,
}

impl ClientConfig {
    /// Create a config with default retry and timeout settings and no proxy.
    pub fn new(auth_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            proxy: None,
            max_tries: DEFAULT_MAX_TRIES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Load the config from the environment (and a `.env` file, if present).
    ///
    /// | Variable | Required | Default |
    /// |---|---|---|
    /// | `NEURONLAB_AUTH_TOKEN` | yes | |
    /// | `NEURONLAB_URL` | yes | |
    /// | `SERASA_API_PROXY` | no | no proxy |
    /// | `NEURONLAB_MAX_TRIES` | no | 5 |
    /// | `NEURONLAB_TIMEOUT_SECS` | no | 30 |
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_token = lookup(AUTH_TOKEN_ENV_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                ApiError::Configuration(format!(
                    "{} environment variable required",
                    AUTH_TOKEN_ENV_VAR
                ))
            })?;

        let base_url = lookup(URL_ENV_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ApiError::Configuration(format!("{} environment variable required", URL_ENV_VAR))
            })?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Configuration(format!(
                "{} must start with http:// or https://",
                URL_ENV_VAR
            )));
        }

        let proxy = lookup(PROXY_ENV_VAR)
            .map(|proxy| proxy.trim().to_string())
            .filter(|proxy| !proxy.is_empty());

        let max_tries = match lookup(MAX_TRIES_ENV_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ApiError::Configuration(format!(
                        "{} must be a positive integer, got '{}'",
                        MAX_TRIES_ENV_VAR, raw
                    ))
                })?,
            None => DEFAULT_MAX_TRIES,
        };

        let timeout_secs = match lookup(TIMEOUT_ENV_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ApiError::Configuration(format!(
                        "{} must be a positive number of seconds, got '{}'",
                        TIMEOUT_ENV_VAR, raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(auth_token, base_url)
            .with_max_tries(max_tries)
            .with_timeout(Duration::from_secs(timeout_secs));
        if let Some(proxy) = proxy {
            config = config.with_proxy(proxy);
        }

        // Never log the token or the proxy URL (it may embed credentials)
        tracing::info!("NeuronLab configuration loaded");
        tracing::debug!(
            base_url = %config.base_url,
            max_tries = config.max_tries,
            timeout_secs,
            proxy = config.proxy.is_some(),
            "NeuronLab client settings"
        );

        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy.as_ref().map(|_| "[REDACTED]"))
            .field("max_tries", &self.max_tries)
            .field("timeout", &self.timeout)
            .finish()
    }
}
