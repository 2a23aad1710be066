//! Shared helpers for the integration tests.
#![allow(dead_code)]

use attio_client::{AttioClient, AttioConfig};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Token every test client authenticates with
pub const TEST_TOKEN: &str = "test-token";

/// Build a client wired to a mock server
pub fn client_for(server: &MockServer) -> AttioClient {
    let config = AttioConfig::builder()
        .api_key(TEST_TOKEN)
        .base_url(server.uri())
        .build()
        .expect("test config should build");
    AttioClient::with_config(config).expect("test client should build")
}

/// Record stub with a recognizable id, e.g. `rec_3`
pub fn record(index: usize) -> Value {
    json!({"id": {"record_id": format!("rec_{index}")}})
}

/// Page body `{"data": [...]}` holding `count` records starting at `start`
pub fn page_of_records(start: usize, count: usize) -> Value {
    let data: Vec<Value> = (start..start + count).map(record).collect();
    json!({ "data": data })
}
