//! Query options, default merging and allow-list validation.
//!
//! # Design
//! Options are a flat name → value map because that is what ends up on the
//! wire. The typed builder methods cover the standard keys every endpoint
//! understands; `param` sets anything else and is checked against the
//! endpoint's filter allow-list by `validate`.
//!
//! A `BTreeMap` keeps the rendered query string deterministic.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::error::ApiError;

pub const PAGE: &str = "pagina";
pub const ITEMS: &str = "itens";
pub const ORDER: &str = "ordem";
pub const ORDER_BY: &str = "ordenarPor";
pub const FORMAT: &str = "format";

/// Response formats the upstream API can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }

    /// MIME type sent in the `accept` header.
    pub fn accept(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
        }
    }
}

impl FromStr for Format {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err(ApiError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

impl FromStr for Order {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Order::Asc),
            "DESC" => Ok(Order::Desc),
            _ => Err(ApiError::InvalidParameter(ORDER.to_string())),
        }
    }
}

/// Caller-supplied query options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: BTreeMap<String, String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, page: u32) -> Self {
        self.param(PAGE, page.to_string())
    }

    pub fn items(self, items: u32) -> Self {
        self.param(ITEMS, items.to_string())
    }

    pub fn order(self, order: Order) -> Self {
        self.param(ORDER, order.as_str())
    }

    pub fn order_by(self, field: impl Into<String>) -> Self {
        self.param(ORDER_BY, field)
    }

    pub fn format(self, format: Format) -> Self {
        self.param(FORMAT, format.as_str())
    }

    /// Set an arbitrary option, replacing any previous value.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill in every default the caller did not set. Caller values win.
    pub fn merge_defaults(mut self, defaults: &[(&str, &str)]) -> Self {
        for (name, value) in defaults {
            self.params
                .entry((*name).to_string())
                .or_insert_with(|| (*value).to_string());
        }
        self
    }

    /// Render as `k=v&k=v` with percent-encoded values.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Check every option against `endpoint`'s allow-lists.
///
/// Returns the response format the options ask for (JSON when unset).
pub fn validate(endpoint: &Endpoint, options: &QueryOptions) -> Result<Format, ApiError> {
    let mut format = Format::Json;
    for (name, value) in options.iter() {
        match name {
            FORMAT => format = value.parse()?,
            ORDER => {
                value.parse::<Order>()?;
            }
            PAGE | ITEMS => {
                let n: u32 = value
                    .parse()
                    .map_err(|_| ApiError::InvalidParameter(name.to_string()))?;
                if n == 0 {
                    return Err(ApiError::InvalidParameter(name.to_string()));
                }
            }
            ORDER_BY => {
                if !endpoint.allows_order_field(value) {
                    return Err(ApiError::InvalidParameter(value.to_string()));
                }
            }
            _ => {
                if !endpoint.allows_filter(name) {
                    return Err(ApiError::InvalidParameter(name.to_string()));
                }
            }
        }
    }
    Ok(format)
}
