//! Sequential batch record creation with per-item failure capture.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::client::AttioClient;

/// Group size used when the caller does not pick one
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Outcome of one create call within a batch.
///
/// Serializes to the created record's response body on success and to
/// `{"error": ..., "payload": ...}` on failure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchOutcome {
    /// The server accepted the payload; holds the response body
    Created(Value),
    /// The create call failed; holds the error text and the offending payload
    Failed { error: String, payload: Value },
}

impl BatchOutcome {
    /// True when the create call succeeded
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// True when the create call failed
    pub fn is_failed(&self) -> bool {
        !self.is_created()
    }

    /// Response body of a successful create
    pub fn created(&self) -> Option<&Value> {
        match self {
            Self::Created(response) => Some(response),
            Self::Failed { .. } => None,
        }
    }

    /// Error text and original payload of a failed create
    pub fn failure(&self) -> Option<(&str, &Value)> {
        match self {
            Self::Created(_) => None,
            Self::Failed { error, payload } => Some((error, payload)),
        }
    }
}

impl AttioClient {
    /// Create records one at a time in groups of at most `batch_size`
    /// (default 50), capturing failures instead of aborting.
    ///
    /// The result has exactly one entry per input payload, in input
    /// order. A failed create never affects its neighbors; inspect each
    /// [`BatchOutcome`] to tell successes and failures apart. Calls run
    /// strictly sequentially, so remote writes happen in input order.
    pub async fn batch_create_records(
        &self,
        object_id: &str,
        records: Vec<Value>,
        batch_size: Option<usize>,
    ) -> Vec<BatchOutcome> {
        let batch_size = batch_size.unwrap_or(DEFAULT_BATCH_SIZE).max(1);
        let mut outcomes = Vec::with_capacity(records.len());

        // TODO: pace groups against the API rate limits once a policy
        // is decided; grouping is purely logical for now.
        for group in records.chunks(batch_size) {
            for payload in group {
                match self.create_record(object_id, payload).await {
                    Ok(response) => outcomes.push(BatchOutcome::Created(response)),
                    Err(error) => {
                        warn!(%error, "create call failed within batch");
                        outcomes.push(BatchOutcome::Failed {
                            error: error.to_string(),
                            payload: payload.clone(),
                        });
                    }
                }
            }
        }

        outcomes
    }
}
