//! Stateless HTTP request builder and response parser for the Câmara API.
//!
//! # Design
//! `CamaraApi` holds only a `base_url` and carries no mutable state between
//! calls. One generic `build_request` covers every endpoint: it renders the
//! path, merges the endpoint defaults, validates the options and produces an
//! `HttpRequest`. `parse_response` turns the host's `HttpResponse` into an
//! `Envelope`. The caller executes the actual HTTP round-trip in between.

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{self, Format, QueryOptions};
use crate::types::{Envelope, Payload, RawEnvelope};

/// Synchronous, stateless client for the Câmara API.
#[derive(Debug, Clone)]
pub struct CamaraApi {
    base_url: String,
}

impl CamaraApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the GET request for `endpoint`.
    ///
    /// Fails before producing a request if the ID is missing, the format is
    /// unsupported or an option is not in the endpoint's allow-lists.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
        id: Option<u64>,
        options: Option<QueryOptions>,
    ) -> Result<HttpRequest, ApiError> {
        let path = endpoint.render_path(id)?;
        let options = options.unwrap_or_default().merge_defaults(endpoint.defaults);
        let format = query::validate(endpoint, &options)?;

        let mut url = format!("{}/{path}", self.base_url);
        if !options.is_empty() {
            url.push('?');
            url.push_str(&options.to_query_string());
        }

        Ok(HttpRequest {
            url,
            headers: vec![("accept".to_string(), format.accept().to_string())],
            format,
        })
    }

    /// Parse the response to a request that asked for `format`.
    pub fn parse_response(&self, format: Format, response: HttpResponse) -> Result<Envelope, ApiError> {
        check_status(&response)?;

        let total_count = response
            .header("x-total-count")
            .and_then(|v| v.trim().parse().ok());

        let (data, links) = match format {
            Format::Json => {
                let raw: RawEnvelope = serde_json::from_str(&response.body)
                    .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
                (Payload::Json(raw.dados), raw.links)
            }
            Format::Xml => (Payload::Xml(response.body), Vec::new()),
        };

        Ok(Envelope {
            status: response.status,
            headers: response.headers,
            data,
            links,
            total_count,
        })
    }
}

/// Map non-2xx status codes to `ApiError::RequestError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::RequestError {
        status: Some(response.status),
        body: response.body.clone(),
    })
}
