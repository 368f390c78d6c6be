//! Response envelope, payload and response shaping.
//!
//! # Design
//! The upstream API wraps every JSON result in `{"dados": ..., "links": [...]}`.
//! `Envelope` keeps the whole thing plus the HTTP status, headers and the
//! `x-total-count` header; `Payload` is only the `dados` part. The payload is
//! kept as a `serde_json::Value` since the client does no schema validation;
//! callers that want typed data use `Payload::deserialize`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::query::PAGE;

/// A hypermedia link from the envelope's `links` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    /// Value of the `pagina` query parameter in `href`, if any.
    pub fn page(&self) -> Option<u32> {
        let (_, query) = self.href.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == PAGE)
            .and_then(|(_, v)| v.parse().ok())
    }
}

/// The `dados` part of a response.
///
/// XML responses are not parsed; the raw document is returned as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Xml(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Xml(_) => None,
        }
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Xml(_) => None,
        }
    }

    pub fn as_xml(&self) -> Option<&str> {
        match self {
            Payload::Xml(doc) => Some(doc),
            Payload::Json(_) => None,
        }
    }

    /// Deserialize a JSON payload into a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        match self {
            Payload::Json(value) => {
                T::deserialize(value).map_err(|e| ApiError::DeserializationError(e.to_string()))
            }
            Payload::Xml(_) => Err(ApiError::DeserializationError(
                "cannot deserialize an XML payload".to_string(),
            )),
        }
    }
}

/// The full deserialized response.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub data: Payload,
    pub links: Vec<Link>,
    /// Total number of records across all pages, from `x-total-count`.
    pub total_count: Option<u64>,
}

impl Envelope {
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.link("next").and_then(Link::page)
    }

    pub fn last_page(&self) -> Option<u32> {
        self.link("last").and_then(Link::page)
    }
}

/// Wire shape of a JSON body.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    pub dados: serde_json::Value,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// What a fetch hands back: the whole envelope or just its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Full(Envelope),
    Data(Payload),
}

impl Response {
    pub fn shape(envelope: Envelope, full_response: bool) -> Self {
        if full_response {
            Response::Full(envelope)
        } else {
            Response::Data(envelope.data)
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Response::Full(_))
    }

    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            Response::Full(envelope) => Some(envelope),
            Response::Data(_) => None,
        }
    }

    pub fn into_data(self) -> Payload {
        match self {
            Response::Full(envelope) => envelope.data,
            Response::Data(payload) => payload,
        }
    }
}
