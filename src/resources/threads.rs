use reqwest::Method;
use serde_json::Value;

use crate::client::{AttioClient, QueryParams};
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// List comment threads on a record or list entry.
    ///
    /// The API requires the parent to be named, so the query parameters
    /// are mandatory here.
    pub async fn list_threads(&self, query: &QueryParams) -> Result<Value> {
        self.request(Method::GET, "/threads", None, Some(query))
            .await
    }

    /// Get a single thread with all its comments
    pub async fn get_thread(&self, thread_id: &str) -> Result<Value> {
        let path = format!("/threads/{}", path_segment(thread_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Create a new thread
    pub async fn create_thread(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/threads", Some(payload), None)
            .await
    }

    /// Update a single thread
    pub async fn update_thread(&self, thread_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/threads/{}", path_segment(thread_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single thread by id
    pub async fn delete_thread(&self, thread_id: &str) -> Result<Value> {
        let path = format!("/threads/{}", path_segment(thread_id));
        self.request(Method::DELETE, &path, None, None).await
    }
}
