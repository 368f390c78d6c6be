//! Error types for the Câmara API client.
//!
//! # Design
//! The first three variants are raised while building a request, before any
//! network I/O happens. `RequestError` covers everything that went wrong on
//! the wire: non-2xx statuses carry the upstream status and body, transport
//! failures carry no status.

use thiserror::Error;

/// Errors returned by `CamaraApi` and the clients built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required path parameter (the resource ID) was not supplied.
    #[error("required parameter {0} is not present")]
    MissingParameter(&'static str),

    /// The requested response format is not one of `json` or `xml`.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A sort field or filter key is not in the endpoint's allow-list, or a
    /// standard option carries a malformed value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The server answered with a non-2xx status, or the request never got a
    /// response at all (`status` is `None`).
    #[error("request failed ({}): {body}", describe_status(.status))]
    RequestError { status: Option<u16>, body: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// True when the upstream API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::RequestError { status: Some(404), .. })
    }
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!("HTTP {code}"),
        None => "transport".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_display_includes_status() {
        let err = ApiError::RequestError {
            status: Some(500),
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "request failed (HTTP 500): boom");
    }

    #[test]
    fn transport_error_display_has_no_status() {
        let err = ApiError::RequestError {
            status: None,
            body: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "request failed (transport): connection refused");
    }

    #[test]
    fn not_found_is_detected() {
        let err = ApiError::RequestError {
            status: Some(404),
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!ApiError::MissingParameter("id").is_not_found());
    }
}
