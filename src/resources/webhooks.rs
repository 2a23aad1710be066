use reqwest::Method;
use serde_json::Value;

use crate::client::{AttioClient, QueryParams};
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// List webhook subscriptions, optionally filtered via query parameters
    pub async fn list_webhooks(&self, query: Option<&QueryParams>) -> Result<Value> {
        self.request(Method::GET, "/webhooks", None, query).await
    }

    /// Create a new webhook subscription
    pub async fn create_webhook(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/webhooks", Some(payload), None)
            .await
    }

    /// Get a single webhook by id
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value> {
        let path = format!("/webhooks/{}", path_segment(webhook_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Update a single webhook
    pub async fn update_webhook(&self, webhook_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/webhooks/{}", path_segment(webhook_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single webhook by id
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value> {
        let path = format!("/webhooks/{}", path_segment(webhook_id));
        self.request(Method::DELETE, &path, None, None).await
    }
}
