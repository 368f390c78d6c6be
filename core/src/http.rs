//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The core crate builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network. The host (the async client, or a
//! blocking agent in tests) executes the GET and hands the response back.
//!
//! The API is read-only, so every request is a GET and no method field is
//! carried.

use crate::query::Format;

/// A GET request described as plain data.
///
/// Built by `CamaraApi::build_request`. `format` records the response format
/// the request asked for so the host can pass it back to `parse_response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub format: Format,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
