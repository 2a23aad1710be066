use reqwest::Method;
use serde_json::{Map, Value};

use crate::client::AttioClient;
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// Query the records of an object, with optional filters and sorts.
    ///
    /// A `None` payload queries with no filters. One call returns one
    /// page; [`paginate_records`](Self::paginate_records) walks them all.
    pub async fn list_records(&self, object_id: &str, payload: Option<&Value>) -> Result<Value> {
        let path = format!("/objects/{}/records/query", path_segment(object_id));
        let default = Value::Object(Map::new());
        let body = payload.unwrap_or(&default);
        self.request(Method::POST, &path, Some(body), None).await
    }

    /// Get a single record by its id
    pub async fn get_record(&self, object_id: &str, record_id: &str) -> Result<Value> {
        let path = format!(
            "/objects/{}/records/{}",
            path_segment(object_id),
            path_segment(record_id)
        );
        self.request(Method::GET, &path, None, None).await
    }

    /// Create a new record for an object
    pub async fn create_record(&self, object_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/objects/{}/records", path_segment(object_id));
        self.request(Method::POST, &path, Some(payload), None).await
    }

    /// Create or update a record matched by a unique attribute
    pub async fn assert_record(&self, object_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/objects/{}/records", path_segment(object_id));
        self.request(Method::PUT, &path, Some(payload), None).await
    }

    /// Update a single record by its id
    pub async fn update_record(
        &self,
        object_id: &str,
        record_id: &str,
        payload: &Value,
    ) -> Result<Value> {
        let path = format!(
            "/objects/{}/records/{}",
            path_segment(object_id),
            path_segment(record_id)
        );
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single record by its id
    pub async fn delete_record(&self, object_id: &str, record_id: &str) -> Result<Value> {
        let path = format!(
            "/objects/{}/records/{}",
            path_segment(object_id),
            path_segment(record_id)
        );
        self.request(Method::DELETE, &path, None, None).await
    }
}
