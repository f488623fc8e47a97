//! Error taxonomy surfaced by the gateway.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Categories of gateway errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// The server could not be reached (timeout, DNS, refused, truncated body)
    Network,
    /// Server answered with a non-2xx status other than 401
    Http { status: u16 },
    /// Response body is not valid JSON, or not the expected shape
    Decode,
    /// 401 already handled globally: token cleared, login redirect fired
    SessionExpired,
    /// Invalid client configuration or an unencodable request body
    Config,
    /// Credential store could not be written
    Storage,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Http { .. } => write!(f, "http_status"),
            ApiErrorKind::Decode => write!(f, "decode"),
            ApiErrorKind::SessionExpired => write!(f, "session_expired"),
            ApiErrorKind::Config => write!(f, "config"),
            ApiErrorKind::Storage => write!(f, "storage"),
        }
    }
}

/// Structured error from the gateway with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw response body)
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// Creates an HTTP status error carrying the raw body.
    ///
    /// The backend answers errors as `{"error": "..."}`; when that shape is
    /// present the message is lifted into the summary.
    pub fn http(status: u16, body: &str) -> Self {
        let kind = ApiErrorKind::Http { status };
        let details = (!body.is_empty()).then(|| body.to_string());

        if let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(msg) = json
                .get("error")
                .or_else(|| json.get("message"))
                .and_then(Value::as_str)
        {
            return Self {
                kind,
                message: format!("HTTP {status}: {msg}"),
                details,
            };
        }

        Self {
            kind,
            message: format!("HTTP {status}"),
            details,
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, message)
    }

    pub fn session_expired() -> Self {
        Self::new(
            ApiErrorKind::SessionExpired,
            "Session expired; sign in again",
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Config, message)
    }

    pub fn storage(err: &anyhow::Error) -> Self {
        Self::new(ApiErrorKind::Storage, "Failed to update stored credential")
            .with_details(format!("{err:#}"))
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Http { status } => Some(status),
            _ => None,
        }
    }

    /// Raw response body for `Http` errors.
    pub fn body(&self) -> Option<&str> {
        match self.kind {
            ApiErrorKind::Http { .. } => self.details.as_deref(),
            _ => None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        self.kind == ApiErrorKind::SessionExpired
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for gateway operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_lifts_backend_error_message() {
        let err = ApiError::http(400, r#"{"error":"Username is already taken!"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message, "HTTP 400: Username is already taken!");
        assert_eq!(
            err.body(),
            Some(r#"{"error":"Username is already taken!"}"#)
        );
    }

    #[test]
    fn test_http_error_plain_body() {
        let err = ApiError::http(502, "Bad Gateway");
        assert_eq!(err.message, "HTTP 502");
        assert_eq!(err.body(), Some("Bad Gateway"));
    }

    #[test]
    fn test_http_error_empty_body_has_no_details() {
        let err = ApiError::http(404, "");
        assert_eq!(err.kind, ApiErrorKind::Http { status: 404 });
        assert!(err.details.is_none());
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(ApiError::network("refused").status(), None);
        assert_eq!(ApiError::decode("bad json").body(), None);
        assert!(ApiError::session_expired().is_session_expired());
        assert!(!ApiError::http(401, "").is_session_expired());
    }
}
