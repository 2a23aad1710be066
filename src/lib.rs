//! Attio Client - Async Rust client for the Attio API
//!
//! This crate wraps the Attio HTTP API in resource-oriented methods
//! (objects, records, lists, entries, attributes, notes, tasks, threads,
//! comments, webhooks, workspace members), each mapping to a single REST
//! call and returning the server's JSON unprocessed. On top of that sit
//! two helpers with actual control flow: offset/limit pagination exposed
//! as a lazy [`Stream`](futures::Stream), and sequential batch creation
//! with per-item failure capture.
//!
//! ```no_run
//! use attio_client::AttioClient;
//! use futures::TryStreamExt;
//!
//! # async fn run() -> attio_client::Result<()> {
//! let client = AttioClient::new("your_api_token")?;
//!
//! let objects = client.list_objects().await?;
//! println!("{objects}");
//!
//! let people: Vec<_> = client
//!     .paginate_records("people", None, None)
//!     .try_collect()
//!     .await?;
//! println!("fetched {} records", people.len());
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod config;
pub mod error;

// Transport and the per-endpoint surface
pub mod client;
pub mod resources;

// Pagination and batching helpers
pub mod batch;
pub mod pagination;

// Re-export main types for convenience
pub use batch::{BatchOutcome, DEFAULT_BATCH_SIZE};
pub use client::{AttioClient, QueryParams};
pub use config::{AttioConfig, AttioConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
pub use error::{AttioError, ErrorKind, Result};
pub use pagination::DEFAULT_PAGE_SIZE;
pub use resources::AttributeTarget;
