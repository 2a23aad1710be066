//! Resource-oriented operations, one module per API family.
//!
//! Every method here is a thin delegation: build the endpoint path, hand
//! any payload to the transport in [`AttioClient`](crate::client::AttioClient),
//! and return the server's JSON unprocessed.

pub mod attributes;
pub mod comments;
pub mod entries;
pub mod lists;
pub mod meta;
pub mod notes;
pub mod objects;
pub mod records;
pub mod tasks;
pub mod threads;
pub mod webhooks;
pub mod workspace_members;

pub use attributes::AttributeTarget;

use std::borrow::Cow;

/// Percent-encode a caller-supplied identifier for use as a path segment
pub(crate) fn path_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_escapes_separators() {
        assert_eq!(path_segment("people"), "people");
        assert_eq!(path_segment("custom object"), "custom%20object");
        assert_eq!(path_segment("a/b"), "a%2Fb");
        assert_eq!(path_segment("q?x=1"), "q%3Fx%3D1");
    }
}
