use reqwest::Method;
use serde_json::Value;

use crate::client::{AttioClient, QueryParams};
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// List notes, optionally scoped to a parent record via query parameters
    pub async fn list_notes(&self, query: Option<&QueryParams>) -> Result<Value> {
        self.request(Method::GET, "/notes", None, query).await
    }

    /// Create a new note on a record
    pub async fn create_note(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/notes", Some(payload), None)
            .await
    }

    /// Get a single note by id
    pub async fn get_note(&self, note_id: &str) -> Result<Value> {
        let path = format!("/notes/{}", path_segment(note_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Update a single note
    pub async fn update_note(&self, note_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/notes/{}", path_segment(note_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single note by id
    pub async fn delete_note(&self, note_id: &str) -> Result<Value> {
        let path = format!("/notes/{}", path_segment(note_id));
        self.request(Method::DELETE, &path, None, None).await
    }
}
