//! Static endpoint descriptors for the Câmara dos Deputados v2 API.
//!
//! # Design
//! Every resource the client can reach is one `Endpoint` constant: a path
//! template plus the two allow-lists (sort fields and filter keys) and the
//! options sent when the caller leaves them out. A single generic
//! validator and request builder is parameterized by these records, so
//! adding an endpoint means adding a constant here and nothing else.

use crate::error::ApiError;

/// Defaults shared by every paginated, orderable collection.
pub const LIST_DEFAULTS: &[(&str, &str)] = &[("pagina", "1"), ("ordem", "ASC"), ("format", "json")];

const FORMAT_DEFAULTS: &[(&str, &str)] = &[("format", "json")];

/// Per-resource metadata: where it lives and which options it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Stable identifier, e.g. `orgao_eventos`.
    pub name: &'static str,
    /// Path relative to the base URL; `{id}` marks the resource ID.
    pub path: &'static str,
    /// Fields accepted as the `ordenarPor` value.
    pub order_fields: &'static [&'static str],
    /// Endpoint-specific filter keys.
    pub filter_fields: &'static [&'static str],
    /// Options applied when the caller does not supply them.
    pub defaults: &'static [(&'static str, &'static str)],
}

impl Endpoint {
    pub fn requires_id(&self) -> bool {
        self.path.contains("{id}")
    }

    /// Substitute the resource ID into the path template.
    ///
    /// Upstream IDs are strictly positive, so `Some(0)` is treated the same
    /// as `None`.
    pub fn render_path(&self, id: Option<u64>) -> Result<String, ApiError> {
        if !self.requires_id() {
            return Ok(self.path.to_string());
        }
        match id {
            Some(id) if id != 0 => Ok(self.path.replace("{id}", &id.to_string())),
            _ => Err(ApiError::MissingParameter("id")),
        }
    }

    pub fn allows_order_field(&self, field: &str) -> bool {
        self.order_fields.contains(&field)
    }

    pub fn allows_filter(&self, key: &str) -> bool {
        self.filter_fields.contains(&key)
    }
}

// ---------------------------------------------------------------------------
// orgaos
// ---------------------------------------------------------------------------

pub const ORGAOS: Endpoint = Endpoint {
    name: "orgaos",
    path: "orgaos",
    order_fields: &[
        "id",
        "sigla",
        "nome",
        "apelido",
        "codTipoOrgao",
        "tipoOrgao",
        "dataInicio",
        "dataFim",
    ],
    filter_fields: &["id", "sigla", "codTipoOrgao", "dataInicio", "dataFim"],
    defaults: &[("pagina", "1"), ("ordem", "ASC"), ("format", "json"), ("ordenarPor", "sigla")],
};

pub const ORGAO: Endpoint = Endpoint {
    name: "orgao",
    path: "orgaos/{id}",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const ORGAO_EVENTOS: Endpoint = Endpoint {
    name: "orgao_eventos",
    path: "orgaos/{id}/eventos",
    order_fields: &["id", "dataHoraInicio", "idTipoEvento", "dataInicio", "dataFim"],
    filter_fields: &["id", "idTipoEvento", "dataInicio", "dataFim"],
    defaults: &[
        ("pagina", "1"),
        ("ordem", "ASC"),
        ("format", "json"),
        ("ordenarPor", "dataHoraInicio"),
    ],
};

pub const ORGAO_MEMBROS: Endpoint = Endpoint {
    name: "orgao_membros",
    path: "orgaos/{id}/membros",
    order_fields: &["dataInicio", "dataFim"],
    filter_fields: &["dataInicio", "dataFim"],
    defaults: FORMAT_DEFAULTS,
};

pub const ORGAO_VOTACOES: Endpoint = Endpoint {
    name: "orgao_votacoes",
    path: "orgaos/{id}/votacoes",
    order_fields: &[
        "id",
        "idOrgao",
        "siglaOrgao",
        "idEvento",
        "idProposicao",
        "data",
        "dataHoraRegistro",
        "idProposicaoObjeto",
    ],
    filter_fields: &["dataInicio", "dataFim"],
    defaults: &[("pagina", "1"), ("ordem", "ASC"), ("format", "json"), ("ordenarPor", "id")],
};

// ---------------------------------------------------------------------------
// deputados
// ---------------------------------------------------------------------------

pub const DEPUTADOS: Endpoint = Endpoint {
    name: "deputados",
    path: "deputados",
    order_fields: &["id", "idLegislatura", "nome", "siglaUF", "siglaPartido"],
    filter_fields: &[
        "id",
        "nome",
        "idLegislatura",
        "siglaUf",
        "siglaPartido",
        "siglaSexo",
        "dataInicio",
        "dataFim",
    ],
    defaults: &[("pagina", "1"), ("ordem", "ASC"), ("format", "json"), ("ordenarPor", "nome")],
};

pub const DEPUTADO: Endpoint = Endpoint {
    name: "deputado",
    path: "deputados/{id}",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const DEPUTADO_DESPESAS: Endpoint = Endpoint {
    name: "deputado_despesas",
    path: "deputados/{id}/despesas",
    order_fields: &["ano", "mes", "dataDocumento", "valorDocumento"],
    filter_fields: &["idLegislatura", "ano", "mes", "cnpjCpfFornecedor"],
    defaults: &[("pagina", "1"), ("ordem", "ASC"), ("format", "json"), ("ordenarPor", "ano")],
};

pub const DEPUTADO_DISCURSOS: Endpoint = Endpoint {
    name: "deputado_discursos",
    path: "deputados/{id}/discursos",
    order_fields: &["dataHoraInicio"],
    filter_fields: &["idLegislatura", "dataInicio", "dataFim"],
    defaults: &[
        ("pagina", "1"),
        ("ordem", "ASC"),
        ("format", "json"),
        ("ordenarPor", "dataHoraInicio"),
    ],
};

pub const DEPUTADO_EVENTOS: Endpoint = Endpoint {
    name: "deputado_eventos",
    path: "deputados/{id}/eventos",
    order_fields: &["dataHoraInicio"],
    filter_fields: &["dataInicio", "dataFim"],
    defaults: &[
        ("pagina", "1"),
        ("ordem", "ASC"),
        ("format", "json"),
        ("ordenarPor", "dataHoraInicio"),
    ],
};

pub const DEPUTADO_FRENTES: Endpoint = Endpoint {
    name: "deputado_frentes",
    path: "deputados/{id}/frentes",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const DEPUTADO_ORGAOS: Endpoint = Endpoint {
    name: "deputado_orgaos",
    path: "deputados/{id}/orgaos",
    order_fields: &["dataInicio", "dataFim"],
    filter_fields: &["dataInicio", "dataFim"],
    defaults: &[
        ("pagina", "1"),
        ("ordem", "ASC"),
        ("format", "json"),
        ("ordenarPor", "dataInicio"),
    ],
};

// ---------------------------------------------------------------------------
// blocos
// ---------------------------------------------------------------------------

pub const BLOCOS: Endpoint = Endpoint {
    name: "blocos",
    path: "blocos",
    order_fields: &["id", "nome", "idLegislatura"],
    filter_fields: &["id", "idLegislatura"],
    defaults: &[("pagina", "1"), ("ordem", "ASC"), ("format", "json"), ("ordenarPor", "nome")],
};

pub const BLOCO: Endpoint = Endpoint {
    name: "bloco",
    path: "blocos/{id}",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

// ---------------------------------------------------------------------------
// frentes
// ---------------------------------------------------------------------------

// Upstream does not sort frentes, so no ordenarPor value is accepted.
pub const FRENTES: Endpoint = Endpoint {
    name: "frentes",
    path: "frentes",
    order_fields: &[],
    filter_fields: &["idLegislatura"],
    defaults: &[("pagina", "1"), ("format", "json")],
};

pub const FRENTE: Endpoint = Endpoint {
    name: "frente",
    path: "frentes/{id}",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const FRENTE_MEMBROS: Endpoint = Endpoint {
    name: "frente_membros",
    path: "frentes/{id}/membros",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

// ---------------------------------------------------------------------------
// eventos
// ---------------------------------------------------------------------------

pub const EVENTOS: Endpoint = Endpoint {
    name: "eventos",
    path: "eventos",
    order_fields: &["id", "dataHoraInicio", "codTipoEvento", "codSituacao", "idOrgao"],
    filter_fields: &[
        "id",
        "codTipoEvento",
        "codSituacao",
        "codTipoOrgao",
        "idOrgao",
        "dataInicio",
        "dataFim",
        "horaInicio",
        "horaFim",
    ],
    defaults: &[
        ("pagina", "1"),
        ("ordem", "ASC"),
        ("format", "json"),
        ("ordenarPor", "dataHoraInicio"),
    ],
};

pub const EVENTO: Endpoint = Endpoint {
    name: "evento",
    path: "eventos/{id}",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const EVENTO_DEPUTADOS: Endpoint = Endpoint {
    name: "evento_deputados",
    path: "eventos/{id}/deputados",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const EVENTO_ORGAOS: Endpoint = Endpoint {
    name: "evento_orgaos",
    path: "eventos/{id}/orgaos",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const EVENTO_PAUTA: Endpoint = Endpoint {
    name: "evento_pauta",
    path: "eventos/{id}/pauta",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

pub const EVENTO_VOTACOES: Endpoint = Endpoint {
    name: "evento_votacoes",
    path: "eventos/{id}/votacoes",
    order_fields: &[],
    filter_fields: &[],
    defaults: FORMAT_DEFAULTS,
};

/// Every endpoint the client knows about.
pub const ALL: &[Endpoint] = &[
    ORGAOS,
    ORGAO,
    ORGAO_EVENTOS,
    ORGAO_MEMBROS,
    ORGAO_VOTACOES,
    DEPUTADOS,
    DEPUTADO,
    DEPUTADO_DESPESAS,
    DEPUTADO_DISCURSOS,
    DEPUTADO_EVENTOS,
    DEPUTADO_FRENTES,
    DEPUTADO_ORGAOS,
    BLOCOS,
    BLOCO,
    FRENTES,
    FRENTE,
    FRENTE_MEMBROS,
    EVENTOS,
    EVENTO,
    EVENTO_DEPUTADOS,
    EVENTO_ORGAOS,
    EVENTO_PAUTA,
    EVENTO_VOTACOES,
];

/// Look up an endpoint by its `name`.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|e| e.name == name)
}
