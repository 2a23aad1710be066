//! Offset/limit pagination over the record and entry query endpoints.
//!
//! Both endpoints page with `limit` and `offset` fields inside the POST
//! body and answer `{ "data": [...] }`. The engine turns that into a lazy
//! stream of items: one page is buffered at a time, and the next fetch
//! happens only once the consumer has drained the current page. A page
//! shorter than the requested size is the sole end-of-results signal; the
//! engine never inspects a total count.

use futures::stream::{self, Stream, TryStreamExt};
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::AttioClient;
use crate::error::{AttioError, Result};

/// Page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Which query endpoint a pagination call walks
enum QueryTarget {
    Records { object_id: String },
    Entries { list_id: String },
}

/// Offset/limit bookkeeping for one pagination call.
///
/// Owned exclusively by the stream that created it; the caller's payload
/// is copied in up front and never touched again.
struct QueryCursor {
    target: QueryTarget,
    payload: Map<String, Value>,
    offset: u64,
    limit: u64,
    exhausted: bool,
    invalid: Option<AttioError>,
}

fn build_cursor(target: QueryTarget, payload: Option<Value>, page_size: Option<u64>) -> QueryCursor {
    let limit = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let (payload, mut invalid) = match payload {
        None => (Map::new(), None),
        Some(Value::Object(map)) => (map, None),
        Some(_) => (
            Map::new(),
            Some(AttioError::invalid_config(
                "pagination payload must be a JSON object",
            )),
        ),
    };
    if invalid.is_none() && limit == 0 {
        invalid = Some(AttioError::invalid_config(
            "page size must be greater than zero",
        ));
    }

    let offset = payload.get("offset").and_then(Value::as_u64).unwrap_or(0);

    QueryCursor {
        target,
        payload,
        offset,
        limit,
        exhausted: false,
        invalid,
    }
}

impl AttioClient {
    /// Stream every record matching a query, fetching pages transparently.
    ///
    /// `payload` carries filters and sorts; the engine owns its `limit`
    /// and `offset` fields, replacing `limit` with `page_size` (default
    /// 100) and starting from `offset` when one is present. A failed page
    /// fetch surfaces as the next stream item and ends the stream; items
    /// already yielded stay valid. Dropping the stream early just stops
    /// fetching.
    pub fn paginate_records<'a>(
        &'a self,
        object_id: &str,
        payload: Option<Value>,
        page_size: Option<u64>,
    ) -> impl Stream<Item = Result<Value>> + Send + 'a {
        let target = QueryTarget::Records {
            object_id: object_id.to_string(),
        };
        self.paginate_query(target, payload, page_size)
    }

    /// Stream every entry of a list, fetching pages transparently.
    ///
    /// Same contract as [`paginate_records`](Self::paginate_records).
    pub fn paginate_entries<'a>(
        &'a self,
        list_id: &str,
        payload: Option<Value>,
        page_size: Option<u64>,
    ) -> impl Stream<Item = Result<Value>> + Send + 'a {
        let target = QueryTarget::Entries {
            list_id: list_id.to_string(),
        };
        self.paginate_query(target, payload, page_size)
    }

    fn paginate_query(
        &self,
        target: QueryTarget,
        payload: Option<Value>,
        page_size: Option<u64>,
    ) -> impl Stream<Item = Result<Value>> + Send + '_ {
        let cursor = build_cursor(target, payload, page_size);

        stream::try_unfold(cursor, move |mut cursor| async move {
            if cursor.exhausted {
                return Ok(None);
            }
            if let Some(error) = cursor.invalid.take() {
                return Err(error);
            }

            let items = match self.fetch_page(&cursor).await? {
                Some(items) if !items.is_empty() => items,
                _ => return Ok(None),
            };

            if (items.len() as u64) < cursor.limit {
                cursor.exhausted = true;
            } else {
                cursor.offset += cursor.limit;
            }
            Ok(Some((items, cursor)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<Value, AttioError>)))
        .try_flatten()
    }

    /// Fetch one page; `None` means the response carried no item array
    async fn fetch_page(&self, cursor: &QueryCursor) -> Result<Option<Vec<Value>>> {
        let mut body = cursor.payload.clone();
        body.insert("limit".to_string(), Value::from(cursor.limit));
        body.insert("offset".to_string(), Value::from(cursor.offset));
        let body = Value::Object(body);

        debug!(
            offset = cursor.offset,
            limit = cursor.limit,
            "fetching page"
        );
        let response = match &cursor.target {
            QueryTarget::Records { object_id } => {
                self.list_records(object_id, Some(&body)).await?
            }
            QueryTarget::Entries { list_id } => self.list_entries(list_id, Some(&body)).await?,
        };

        let items = match response {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            },
            _ => None,
        };
        Ok(items)
    }
}
