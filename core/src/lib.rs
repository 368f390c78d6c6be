//! Sans-IO core for the Câmara dos Deputados open-data API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The async `camara-client`
//! crate, or any other host, executes the actual GET.
//!
//! # Design
//! - Each resource is a static `Endpoint` descriptor: path template, sort
//!   and filter allow-lists, default options.
//! - `CamaraApi::build_request` is the only request builder. Defaults are
//!   merged first, then every option is validated, so a bad call never
//!   yields a request.
//! - `Response::shape` picks between the full `Envelope` and its payload.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod query;
pub mod types;

pub use client::CamaraApi;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use query::{Format, Order, QueryOptions};
pub use types::{Envelope, Link, Payload, Response};
