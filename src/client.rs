use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::AttioConfig;
use crate::error::{classify_response, AttioError, Result};

/// Query-string parameters accepted by the list endpoints
pub type QueryParams = HashMap<String, String>;

/// Asynchronous client for the Attio API.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct AttioClient {
    http: reqwest::Client,
    base_url: String,
}

impl AttioClient {
    /// Create a client for the default API endpoint with the given key
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        Self::with_config(AttioConfig::new(api_key))
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::with_config(AttioConfig::from_env()?)
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: AttioConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(AttioError::invalid_config("API key must not be empty"));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let mut headers = HeaderMap::new();
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| AttioError::invalid_config("API key is not a valid header value"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are issued against, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one API request and parse the JSON response.
    ///
    /// Endpoint paths are appended to the base URL as-is. Non-success
    /// responses become [`AttioError::Api`] values classified by status
    /// code; an empty success body becomes `Value::Null`.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&QueryParams>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "sending API request");

        let mut req = self.http.request(method, url);
        if let Some(query) = query {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), path, "API request failed");
            return Err(classify_response(status.as_u16(), &body));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn client_uses_default_base_url() {
        let client = AttioClient::new("secret").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn client_rejects_empty_api_key() {
        let result = AttioClient::new("");
        assert!(matches!(result, Err(AttioError::InvalidConfig { .. })));
    }

    #[test]
    fn client_rejects_api_key_with_control_characters() {
        let result = AttioClient::new("bad\nkey");
        assert!(matches!(result, Err(AttioError::InvalidConfig { .. })));
    }

    #[test]
    fn client_rejects_invalid_base_url() {
        let config = AttioConfig::builder()
            .api_key("secret")
            .base_url("not a url")
            .build()
            .unwrap();
        let result = AttioClient::with_config(config);
        assert!(matches!(result, Err(AttioError::UrlParse(_))));
    }

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = AttioConfig::builder()
            .api_key("secret")
            .base_url("https://api.attio.com/v2/")
            .build()
            .unwrap();
        let client = AttioClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "https://api.attio.com/v2");
    }
}
