use reqwest::Method;
use serde_json::Value;

use crate::client::{AttioClient, QueryParams};
use crate::error::Result;
use crate::resources::path_segment;

/// Parent kind an attribute lives on.
///
/// The API exposes the same attribute endpoints under both `/objects`
/// and `/lists`; this picks which family a call addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTarget {
    Objects,
    Lists,
}

impl AttributeTarget {
    /// Path segment for this target
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Objects => "objects",
            Self::Lists => "lists",
        }
    }
}

impl AttioClient {
    /// List the attributes defined on an object or list
    pub async fn list_attributes(
        &self,
        target: AttributeTarget,
        identifier: &str,
        query: Option<&QueryParams>,
    ) -> Result<Value> {
        let path = format!(
            "/{}/{}/attributes",
            target.as_str(),
            path_segment(identifier)
        );
        self.request(Method::GET, &path, None, query).await
    }

    /// Create a new attribute on an object or list
    pub async fn create_attribute(
        &self,
        target: AttributeTarget,
        identifier: &str,
        payload: &Value,
    ) -> Result<Value> {
        let path = format!(
            "/{}/{}/attributes",
            target.as_str(),
            path_segment(identifier)
        );
        self.request(Method::POST, &path, Some(payload), None).await
    }

    /// Get a single attribute on an object or list
    pub async fn get_attribute(
        &self,
        target: AttributeTarget,
        identifier: &str,
        attribute: &str,
    ) -> Result<Value> {
        let path = format!(
            "/{}/{}/attributes/{}",
            target.as_str(),
            path_segment(identifier),
            path_segment(attribute)
        );
        self.request(Method::GET, &path, None, None).await
    }

    /// Update a single attribute on an object or list
    pub async fn update_attribute(
        &self,
        target: AttributeTarget,
        identifier: &str,
        attribute: &str,
        payload: &Value,
    ) -> Result<Value> {
        let path = format!(
            "/{}/{}/attributes/{}",
            target.as_str(),
            path_segment(identifier),
            path_segment(attribute)
        );
        self.request(Method::PATCH, &path, Some(payload), None)
            .await
    }

    /// Delete a single attribute on an object or list
    pub async fn delete_attribute(
        &self,
        target: AttributeTarget,
        identifier: &str,
        attribute: &str,
    ) -> Result<Value> {
        let path = format!(
            "/{}/{}/attributes/{}",
            target.as_str(),
            path_segment(identifier),
            path_segment(attribute)
        );
        self.request(Method::DELETE, &path, None, None).await
    }
}
