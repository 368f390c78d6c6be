//! Async client for the Câmara dos Deputados open-data API.
//!
//! # Example
//!
//! ```no_run
//! use camara_client::{CamaraClient, Format, Order, QueryOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CamaraClient::from_env()?;
//!
//! // Payload only.
//! let orgao = client.get_orgao(2003, Format::Json, false).await?.into_data();
//!
//! // Full envelope with pagination links and x-total-count.
//! let options = QueryOptions::new().order_by("dataHoraInicio").order(Order::Desc);
//! let eventos = client.get_orgao_eventos(2003, Some(options), true).await?;
//! let next = eventos.envelope().and_then(|e| e.next_page());
//! # let _ = (orgao, next);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! `CamaraClient::from_env` reads `camara.yaml` and `CAMARA_*` variables:
//!
//! - `CAMARA_BASE_URL` (optional) - defaults to `https://dadosabertos.camara.leg.br/api/v2`
//! - `CAMARA_USER_AGENT` (optional)

mod client;
pub mod config;
mod resources;

pub use camara_core::{endpoint, ApiError, Endpoint, Envelope, Format, Link, Order, Payload, QueryOptions, Response};
pub use client::CamaraClient;
pub use config::{ClientConfig, ConfigError};
