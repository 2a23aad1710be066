use reqwest::Method;
use serde_json::Value;

use crate::client::AttioClient;
use crate::error::Result;

impl AttioClient {
    /// Identify the workspace and permissions behind the current API token
    pub async fn identify_self(&self) -> Result<Value> {
        self.request(Method::GET, "/self", None, None).await
    }
}
