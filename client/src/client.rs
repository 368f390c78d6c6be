//! Async host for `camara-core`.
//!
//! `CamaraClient` builds each request with the sans-IO `CamaraApi`, sends it
//! with `reqwest`, and hands the response back for parsing and shaping. All
//! validation happens inside `build_request`, so a rejected call never
//! touches the network.

use camara_core::{ApiError, CamaraApi, Endpoint, HttpRequest, HttpResponse, QueryOptions, Response};

use crate::config::{ClientConfig, ConfigError};

/// Async client for the Câmara open-data API.
///
/// Cheap to clone; clones share reqwest's connection pool and nothing else.
#[derive(Debug, Clone)]
pub struct CamaraClient {
    http: reqwest::Client,
    api: CamaraApi,
}

impl CamaraClient {
    /// Create a client with a default `reqwest::Client`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client with a custom `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            api: CamaraApi::new(base_url),
        }
    }

    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    /// Build a client from `camara.yaml` and `CAMARA_*` environment variables.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(&ClientConfig::load()?)
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Fetch one page of `endpoint`.
    ///
    /// Returns the whole envelope when `full_response` is set, otherwise only
    /// its payload.
    ///
    /// # Errors
    /// `MissingParameter`, `InvalidFormat` and `InvalidParameter` are returned
    /// before any request is sent. `RequestError` covers transport failures
    /// and non-2xx statuses; `DeserializationError` a malformed body.
    #[tracing::instrument(skip_all, fields(endpoint = endpoint.name, id = ?id))]
    pub async fn fetch(
        &self,
        endpoint: &Endpoint,
        id: Option<u64>,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response, ApiError> {
        let request = self
            .api
            .build_request(endpoint, id, options)
            .inspect_err(|e| tracing::warn!(error = %e, "request rejected"))?;

        tracing::debug!(url = %request.url, "sending request");
        let response = self.execute(&request).await?;
        let status = response.status;

        let envelope = self
            .api
            .parse_response(request.format, response)
            .inspect_err(|e| tracing::warn!(status, error = %e, "request failed"))?;

        tracing::debug!(status, total_count = ?envelope.total_count, "response received");
        Ok(Response::shape(envelope, full_response))
    }

    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.http.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response.text().await.map_err(transport_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    tracing::warn!(error = %err, "transport error");
    ApiError::RequestError {
        status: err.status().map(|s| s.as_u16()),
        body: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let client = CamaraClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = ClientConfig {
            base_url: "http://localhost:3000".to_string(),
            ..ClientConfig::default()
        };
        let client = CamaraClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = ClientConfig {
            base_url: "localhost".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            CamaraClient::from_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn invalid_options_fail_without_a_server() {
        // Nothing listens on port 9; a sent request would be a RequestError.
        let client = CamaraClient::new("http://127.0.0.1:9");
        let options = QueryOptions::new().order_by("invalidField");
        let err = client
            .fetch(&camara_core::endpoint::ORGAOS, None, Some(options), false)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::InvalidParameter("invalidField".to_string()));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let client = CamaraClient::new("http://127.0.0.1:9");
        let err = client
            .fetch(&camara_core::endpoint::ORGAOS, None, None, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestError { status: None, .. }));
    }
}
