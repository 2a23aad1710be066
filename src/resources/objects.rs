use reqwest::Method;
use serde_json::Value;

use crate::client::AttioClient;
use crate::error::Result;
use crate::resources::{path_segment, AttributeTarget};

impl AttioClient {
    /// List every object in the workspace, system-defined and custom alike
    pub async fn list_objects(&self) -> Result<Value> {
        self.request(Method::GET, "/objects", None, None).await
    }

    /// Get a single object by id or slug
    pub async fn get_object(&self, object_id: &str) -> Result<Value> {
        let path = format!("/objects/{}", path_segment(object_id));
        self.request(Method::GET, &path, None, None).await
    }

    /// Create a custom object in the workspace
    pub async fn create_object(&self, payload: &Value) -> Result<Value> {
        self.request(Method::POST, "/objects", Some(payload), None)
            .await
    }

    /// Update a single object
    pub async fn update_object(&self, object_id: &str, payload: &Value) -> Result<Value> {
        let path = format!("/objects/{}", path_segment(object_id));
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single object by id or slug
    pub async fn delete_object(&self, object_id: &str) -> Result<Value> {
        let path = format!("/objects/{}", path_segment(object_id));
        self.request(Method::DELETE, &path, None, None).await
    }

    /// List only the custom objects, filtering out system-defined ones.
    ///
    /// The filter runs client-side on the `is_system` flag; objects
    /// without the flag are treated as system-defined.
    pub async fn list_custom_objects(&self) -> Result<Value> {
        let mut objects = self.list_objects().await?;
        if let Some(data) = objects.get_mut("data").and_then(Value::as_array_mut) {
            data.retain(|object| object.get("is_system").and_then(Value::as_bool) == Some(false));
        }
        Ok(objects)
    }

    /// Get an object together with its attribute definitions.
    ///
    /// Combines [`get_object`](Self::get_object) and
    /// [`list_attributes`](Self::list_attributes) into one response, with
    /// the attribute list inserted under `data.attributes`.
    pub async fn get_object_schema(&self, object_id: &str) -> Result<Value> {
        let mut object = self.get_object(object_id).await?;
        if object.get("data").is_none() {
            return Ok(object);
        }

        let attributes = self
            .list_attributes(AttributeTarget::Objects, object_id, None)
            .await?;
        let attribute_data = attributes
            .get("data")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        if let Some(Value::Object(data)) = object.get_mut("data") {
            data.insert("attributes".to_string(), attribute_data);
        }
        Ok(object)
    }
}
