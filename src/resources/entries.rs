use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::AttioClient;
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// Query the entries of a list, with optional filters and sorts.
    ///
    /// A `None` payload queries with no filters. One call returns one
    /// page; [`paginate_entries`](Self::paginate_entries) walks them all.
    pub async fn list_entries(&self, list_id: &str, payload: Option<&Value>) -> Result<Value> {
        let path = format!("/lists/{}/entries/query", path_segment(list_id));
        let default = Value::Object(Map::new());
        let body = payload.unwrap_or(&default);
        self.request(Method::POST, &path, Some(body), None).await
    }

    /// Add a record to a list by creating a new entry
    pub async fn create_entry(&self, list_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/lists/{}/entries", path_segment(list_id));
        self.request(Method::POST, &path, Some(payload), None).await
    }

    /// Create or update entries matched by their parent record
    pub async fn assert_entries(&self, list_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/lists/{}/entries", path_segment(list_id));
        self.request(Method::PUT, &path, Some(payload), None).await
    }

    /// Get a single list entry by its id
    pub async fn get_entry(&self, list_id: &str, entry_id: &str) -> Result<Value> {
        let path = format!(
            "/lists/{}/entries/{}",
            path_segment(list_id),
            path_segment(entry_id)
        );
        self.request(Method::GET, &path, None, None).await
    }

    /// Delete a single list entry by its id
    pub async fn delete_entry(&self, list_id: &str, entry_id: &str) -> Result<Value> {
        let path = format!(
            "/lists/{}/entries/{}",
            path_segment(list_id),
            path_segment(entry_id)
        );
        self.request(Method::DELETE, &path, None, None).await
    }
}
