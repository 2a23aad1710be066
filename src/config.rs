use std::env;
use std::fmt;

use crate::error::{AttioError, Result};

/// Default Attio API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.attio.com/v2";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default value for the `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!("attio-client/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "ATTIO_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "ATTIO_BASE_URL";

/// Connection settings for [`AttioClient`](crate::client::AttioClient)
#[derive(Clone)]
pub struct AttioConfig {
    /// Bearer token sent in the `Authorization` header
    pub api_key: String,
    /// API root; endpoint paths are appended to it verbatim
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Value sent as the `User-Agent` header
    pub user_agent: String,
}

impl AttioConfig {
    /// Create a configuration with defaults for everything but the key
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> AttioConfigBuilder {
        AttioConfigBuilder::new()
    }

    /// Read the configuration from `ATTIO_API_KEY` and, when set, `ATTIO_BASE_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| AttioError::invalid_config(format!("{API_KEY_ENV} is not set")))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

// The API key never appears in debug output
impl fmt::Debug for AttioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttioConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Builder for creating [`AttioConfig`] programmatically
pub struct AttioConfigBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout_seconds: u64,
    user_agent: String,
}

impl AttioConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the base URL, e.g. to point at a mock server
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Override the `User-Agent` header value
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the configuration; fails when no API key was provided
    pub fn build(self) -> Result<AttioConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| AttioError::invalid_config("api_key is required"))?;

        Ok(AttioConfig {
            api_key,
            base_url: self.base_url,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent,
        })
    }
}

impl Default for AttioConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
