use reqwest::Method;
use serde_json::Value;

use crate::client::AttioClient;
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// List all lists in the workspace
    pub async fn list_lists(&self) -> Result<Value> {
        self.request(Method::GET, "/lists", None, None).await
    }

    /// Create a new list
    pub async fn create_list(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/lists", Some(payload), None)
            .await
    }

    /// Get a single list by id or slug
    pub async fn get_list(&self, list_id: &str) -> Result<Value> {
        let path = format!("/lists/{}", path_segment(list_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Update a single list
    pub async fn update_list(&self, list_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/lists/{}", path_segment(list_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single list by id or slug
    pub async fn delete_list(&self, list_id: &str) -> Result<Value> {
        let path = format!("/lists/{}", path_segment(list_id));
        self.request(Method::DELETE, &path, None, None).await
    }
}
