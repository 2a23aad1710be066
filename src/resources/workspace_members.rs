use reqwest::Method;
use serde_json::Value;

use crate::client::AttioClient;
use crate::error::Result;
use crate::resources::path_segment;

impl AttioClient {
    /// List all members of the workspace
    pub async fn list_members(&self) -> Result<Value> {
        self.request(Method::GET, "/workspace_members", None, None)
            .await
    }

    /// Get a single workspace member by id
    pub async fn get_member(&self, workspace_member_id: &str) -> Result<Value> {
        let path = format!("/workspace_members/{}", path_segment(workspace_member_id));
        self.request(Method::GET, &path, None, None).await
    }
}
