use reqwest::Method;
use serde_json::Value;

use crate::client::{AttioClient, QueryParams};
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// List tasks, optionally filtered via query parameters
    pub async fn list_tasks(&self, query: Option<&QueryParams>) -> Result<Value> {
        self.request(Method::GET, "/tasks", None, query).await
    }

    /// Create a new task
    pub async fn create_task(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/tasks", Some(payload), None)
            .await
    }

    /// Get a single task by id
    pub async fn get_task(&self, task_id: &str) -> Result<Value> {
        let path = format!("/tasks/{}", path_segment(task_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Update a single task
    pub async fn update_task(&self, task_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/tasks/{}", path_segment(task_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single task by id
    pub async fn delete_task(&self, task_id: &str) -> Result<Value> {
        let path = format!("/tasks/{}", path_segment(task_id));
        self.request(Method::DELETE, &path, None, None).await
    }
}
