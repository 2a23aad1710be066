use reqwest::Method;
use serde_json::Value;

use crate::client::AttioClient;
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// Create a new comment, either on a thread or starting one
    pub async fn create_comment(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/comments", Some(payload), None)
            .await
    }

    /// Get a single comment by id
    pub async fn get_comment(&self, comment_id: &str) -> Result<Value> {
        let path = format!("/comments/{}", path_segment(comment_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Update a single comment
    pub async fn update_comment(&self, comment_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/comments/{}", path_segment(comment_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single comment by id
    pub async fn delete_comment(&self, comment_id: &str) -> Result<Value> {
        let path = format!("/comments/{}", path_segment(comment_id));
        self.request(Method::DELETE, &path, None, None).await
    }
}
