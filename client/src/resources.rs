//! Per-resource entry points.
//!
//! Each method is a one-line delegate to `CamaraClient::fetch` with the
//! matching descriptor from `camara_core::endpoint`. List methods take
//! optional `QueryOptions` (endpoint defaults fill the gaps), single-resource
//! methods take only the response format.
//!
//! # Errors
//! Every method fails the same way `CamaraClient::fetch` does.

use camara_core::endpoint::{
    BLOCO, BLOCOS, DEPUTADO, DEPUTADOS, DEPUTADO_DESPESAS, DEPUTADO_DISCURSOS, DEPUTADO_EVENTOS,
    DEPUTADO_FRENTES, DEPUTADO_ORGAOS, EVENTO, EVENTOS, EVENTO_DEPUTADOS, EVENTO_ORGAOS, EVENTO_PAUTA,
    EVENTO_VOTACOES, FRENTE, FRENTES, FRENTE_MEMBROS, ORGAO, ORGAOS, ORGAO_EVENTOS, ORGAO_MEMBROS,
    ORGAO_VOTACOES,
};
use camara_core::{ApiError, Endpoint, Format, QueryOptions, Response};

use crate::client::CamaraClient;

type Result<T> = std::result::Result<T, ApiError>;

impl CamaraClient {
    async fn fetch_one(&self, endpoint: &Endpoint, id: u64, format: Format, full: bool) -> Result<Response> {
        self.fetch(endpoint, Some(id), Some(QueryOptions::new().format(format)), full)
            .await
    }

    // --- orgaos ---

    /// `GET /orgaos`, sorted by `sigla` unless told otherwise.
    pub async fn get_orgaos(&self, options: Option<QueryOptions>, full_response: bool) -> Result<Response> {
        self.fetch(&ORGAOS, None, options, full_response).await
    }

    /// `GET /orgaos/{id}`.
    pub async fn get_orgao(&self, id: u64, format: Format, full_response: bool) -> Result<Response> {
        self.fetch_one(&ORGAO, id, format, full_response).await
    }

    /// `GET /orgaos/{id}/eventos`, sorted by `dataHoraInicio` by default.
    pub async fn get_orgao_eventos(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&ORGAO_EVENTOS, Some(id), options, full_response).await
    }

    /// `GET /orgaos/{id}/membros`.
    pub async fn get_orgao_membros(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&ORGAO_MEMBROS, Some(id), options, full_response).await
    }

    /// `GET /orgaos/{id}/votacoes`, sorted by `id` by default.
    pub async fn get_orgao_votacoes(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&ORGAO_VOTACOES, Some(id), options, full_response).await
    }

    // --- deputados ---

    pub async fn get_deputados(&self, options: Option<QueryOptions>, full_response: bool) -> Result<Response> {
        self.fetch(&DEPUTADOS, None, options, full_response).await
    }

    pub async fn get_deputado(&self, id: u64, format: Format, full_response: bool) -> Result<Response> {
        self.fetch_one(&DEPUTADO, id, format, full_response).await
    }

    /// Expense records of one deputy, sorted by `ano` by default.
    pub async fn get_deputado_despesas(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&DEPUTADO_DESPESAS, Some(id), options, full_response).await
    }

    pub async fn get_deputado_discursos(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&DEPUTADO_DISCURSOS, Some(id), options, full_response).await
    }

    pub async fn get_deputado_eventos(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&DEPUTADO_EVENTOS, Some(id), options, full_response).await
    }

    pub async fn get_deputado_frentes(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&DEPUTADO_FRENTES, Some(id), options, full_response).await
    }

    pub async fn get_deputado_orgaos(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&DEPUTADO_ORGAOS, Some(id), options, full_response).await
    }

    // --- blocos ---

    pub async fn get_blocos(&self, options: Option<QueryOptions>, full_response: bool) -> Result<Response> {
        self.fetch(&BLOCOS, None, options, full_response).await
    }

    pub async fn get_bloco(&self, id: u64, format: Format, full_response: bool) -> Result<Response> {
        self.fetch_one(&BLOCO, id, format, full_response).await
    }

    // --- frentes ---

    /// `GET /frentes`. Upstream does not sort this collection.
    pub async fn get_frentes(&self, options: Option<QueryOptions>, full_response: bool) -> Result<Response> {
        self.fetch(&FRENTES, None, options, full_response).await
    }

    pub async fn get_frente(&self, id: u64, format: Format, full_response: bool) -> Result<Response> {
        self.fetch_one(&FRENTE, id, format, full_response).await
    }

    pub async fn get_frente_membros(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&FRENTE_MEMBROS, Some(id), options, full_response).await
    }

    // --- eventos ---

    pub async fn get_eventos(&self, options: Option<QueryOptions>, full_response: bool) -> Result<Response> {
        self.fetch(&EVENTOS, None, options, full_response).await
    }

    pub async fn get_evento(&self, id: u64, format: Format, full_response: bool) -> Result<Response> {
        self.fetch_one(&EVENTO, id, format, full_response).await
    }

    pub async fn get_evento_deputados(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&EVENTO_DEPUTADOS, Some(id), options, full_response).await
    }

    pub async fn get_evento_orgaos(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&EVENTO_ORGAOS, Some(id), options, full_response).await
    }

    /// Agenda items of an event.
    pub async fn get_evento_pauta(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&EVENTO_PAUTA, Some(id), options, full_response).await
    }

    pub async fn get_evento_votacoes(
        &self,
        id: u64,
        options: Option<QueryOptions>,
        full_response: bool,
    ) -> Result<Response> {
        self.fetch(&EVENTO_VOTACOES, Some(id), options, full_response).await
    }
}
