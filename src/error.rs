use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for Attio client operations
pub type Result<T> = std::result::Result<T, AttioError>;

/// Error types for Attio client operations
#[derive(Debug, Error)]
pub enum AttioError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Non-success response from the API, classified by status code
    #[error("{kind} ({status}): {message}")]
    Api {
        kind: ErrorKind,
        status: u16,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl AttioError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Classification of an API error, or `None` for transport and local errors
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Status code of an API error, or `None` for transport and local errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure class of a non-success API response, derived from the status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Unprocessable,
    RateLimited,
    Server,
    Other,
}

impl ErrorKind {
    /// Map an HTTP status code to its failure class
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            422 => Self::Unprocessable,
            429 => Self::RateLimited,
            status if status >= 500 => Self::Server,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::Conflict => "Conflict",
            Self::Unprocessable => "Unprocessable Entity",
            Self::RateLimited => "Rate Limited",
            Self::Server => "Server Error",
            Self::Other => "Request failed",
        };
        write!(f, "{label}")
    }
}

/// Convert a non-success response into the matching [`AttioError::Api`] value.
///
/// The message prefers the structured `message` field of a JSON body and
/// falls back to the raw body text.
pub(crate) fn classify_response(status: u16, body: &str) -> AttioError {
    AttioError::Api {
        kind: ErrorKind::from_status(status),
        status,
        message: extract_error_message(body),
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|data| {
            data.get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mapping_follows_status_codes() {
        let cases = [
            (400, ErrorKind::BadRequest),
            (401, ErrorKind::Unauthorized),
            (403, ErrorKind::Forbidden),
            (404, ErrorKind::NotFound),
            (409, ErrorKind::Conflict),
            (422, ErrorKind::Unprocessable),
            (429, ErrorKind::RateLimited),
            (500, ErrorKind::Server),
            (503, ErrorKind::Server),
            (599, ErrorKind::Server),
            (418, ErrorKind::Other),
            (301, ErrorKind::Other),
        ];

        for (status, kind) in cases {
            assert_eq!(ErrorKind::from_status(status), kind, "status {status}");
        }
    }

    #[test]
    fn classifier_prefers_structured_message() {
        let error = classify_response(404, r#"{"message": "No such record"}"#);
        assert_eq!(error.kind(), Some(ErrorKind::NotFound));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.to_string(), "Not Found (404): No such record");
    }

    #[test]
    fn classifier_falls_back_to_raw_body() {
        let error = classify_response(500, "upstream exploded");
        assert_eq!(error.to_string(), "Server Error (500): upstream exploded");
    }

    #[test]
    fn classifier_ignores_non_string_message() {
        let error = classify_response(400, r#"{"message": 42}"#);
        assert_eq!(error.to_string(), r#"Bad Request (400): {"message": 42}"#);
    }

    #[test]
    fn classifier_keeps_empty_body() {
        let error = classify_response(429, "");
        assert_eq!(error.to_string(), "Rate Limited (429): ");
        assert_eq!(error.kind(), Some(ErrorKind::RateLimited));
    }

    #[test]
    fn unmapped_status_uses_generic_label() {
        let error = classify_response(418, "teapot");
        assert_eq!(error.kind(), Some(ErrorKind::Other));
        assert_eq!(error.to_string(), "Request failed (418): teapot");
    }

    #[test]
    fn invalid_config_constructor_sets_message() {
        let error = AttioError::invalid_config("missing key");
        assert_eq!(error.to_string(), "Invalid configuration: missing key");
        assert_eq!(error.kind(), None);
        assert_eq!(error.status(), None);
    }
}
