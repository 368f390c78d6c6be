//! Canned records served by the mock API.

use std::collections::HashMap;

use serde_json::{json, Value};

/// Sub-collections each top-level resource exposes.
pub const SUBRESOURCES: &[(&str, &[&str])] = &[
    ("orgaos", &["eventos", "membros", "votacoes"]),
    ("deputados", &["despesas", "discursos", "eventos", "frentes", "orgaos"]),
    ("blocos", &[]),
    ("frentes", &["membros"]),
    ("eventos", &["deputados", "orgaos", "pauta", "votacoes"]),
];

#[derive(Debug, Clone)]
pub struct Fixtures {
    collections: HashMap<String, Vec<Value>>,
    children: HashMap<(String, u64, String), Vec<Value>>,
}

impl Fixtures {
    pub fn collection(&self, resource: &str) -> Option<&[Value]> {
        self.collections.get(resource).map(Vec::as_slice)
    }

    pub fn item(&self, resource: &str, id: u64) -> Option<&Value> {
        self.collection(resource)?
            .iter()
            .find(|item| item["id"].as_u64() == Some(id))
    }

    /// Children of `resource/id/sub`, or `None` if the parent or the
    /// sub-collection does not exist.
    pub fn children(&self, resource: &str, id: u64, sub: &str) -> Option<Vec<Value>> {
        self.item(resource, id)?;
        let known = SUBRESOURCES
            .iter()
            .find(|(r, _)| *r == resource)
            .is_some_and(|(_, subs)| subs.contains(&sub));
        if !known {
            return None;
        }
        Some(
            self.children
                .get(&(resource.to_string(), id, sub.to_string()))
                .cloned()
                .unwrap_or_default(),
        )
    }

    pub fn insert(&mut self, resource: &str, items: Vec<Value>) {
        self.collections.insert(resource.to_string(), items);
    }

    pub fn insert_children(&mut self, resource: &str, id: u64, sub: &str, items: Vec<Value>) {
        self.children
            .insert((resource.to_string(), id, sub.to_string()), items);
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        let mut fixtures = Fixtures {
            collections: HashMap::new(),
            children: HashMap::new(),
        };

        fixtures.insert(
            "orgaos",
            vec![
                json!({"id": 2003, "sigla": "CCJC", "nome": "Comissão de Constituição e Justiça e de Cidadania", "apelido": "Constituição e Justiça", "codTipoOrgao": 2, "tipoOrgao": "Comissão Permanente"}),
                json!({"id": 2004, "sigla": "CFT", "nome": "Comissão de Finanças e Tributação", "apelido": "Finanças e Tributação", "codTipoOrgao": 2, "tipoOrgao": "Comissão Permanente"}),
                json!({"id": 180, "sigla": "PLEN", "nome": "Plenário", "apelido": "Plenário", "codTipoOrgao": 26, "tipoOrgao": "Plenário Virtual"}),
            ],
        );
        fixtures.insert(
            "deputados",
            vec![
                json!({"id": 204554, "nome": "Abílio Santana", "siglaPartido": "PL", "siglaUf": "BA", "idLegislatura": 57, "siglaSexo": "M"}),
                json!({"id": 178957, "nome": "Alice Portugal", "siglaPartido": "PCdoB", "siglaUf": "BA", "idLegislatura": 57, "siglaSexo": "F"}),
                json!({"id": 160511, "nome": "Tabata Amaral", "siglaPartido": "PSB", "siglaUf": "SP", "idLegislatura": 57, "siglaSexo": "F"}),
            ],
        );
        fixtures.insert(
            "blocos",
            vec![
                json!({"id": 594, "nome": "Federação Brasil da Esperança", "idLegislatura": 57}),
                json!({"id": 595, "nome": "Federação PSDB Cidadania", "idLegislatura": 57}),
            ],
        );
        fixtures.insert(
            "frentes",
            vec![
                json!({"id": 54012, "titulo": "Frente Parlamentar da Educação", "idLegislatura": 57}),
                json!({"id": 54013, "titulo": "Frente Parlamentar Ambientalista", "idLegislatura": 57}),
            ],
        );
        fixtures.insert(
            "eventos",
            vec![
                json!({"id": 70001, "dataHoraInicio": "2024-03-05T10:00", "codTipoEvento": 110, "descricaoTipo": "Reunião Deliberativa", "idOrgao": 2003}),
                json!({"id": 70002, "dataHoraInicio": "2024-03-06T14:30", "codTipoEvento": 120, "descricaoTipo": "Audiência Pública", "idOrgao": 2004}),
            ],
        );

        fixtures.insert_children(
            "orgaos",
            2003,
            "eventos",
            vec![
                json!({"id": 70003, "dataHoraInicio": "2024-04-10T09:00", "idTipoEvento": 110}),
                json!({"id": 70001, "dataHoraInicio": "2024-03-05T10:00", "idTipoEvento": 110}),
                json!({"id": 70004, "dataHoraInicio": "2024-05-02T15:00", "idTipoEvento": 120}),
            ],
        );
        fixtures.insert_children(
            "orgaos",
            2003,
            "membros",
            vec![
                json!({"id": 178957, "nome": "Alice Portugal", "titulo": "Titular", "dataInicio": "2023-03-01"}),
                json!({"id": 160511, "nome": "Tabata Amaral", "titulo": "Suplente", "dataInicio": "2023-03-01"}),
            ],
        );
        fixtures.insert_children(
            "orgaos",
            2003,
            "votacoes",
            vec![json!({"id": "2345678-12", "idOrgao": 2003, "siglaOrgao": "CCJC", "data": "2024-03-05"})],
        );
        fixtures.insert_children(
            "deputados",
            204554,
            "despesas",
            vec![
                json!({"ano": 2024, "mes": 2, "tipoDespesa": "COMBUSTÍVEIS E LUBRIFICANTES.", "valorDocumento": 350.0}),
                json!({"ano": 2024, "mes": 1, "tipoDespesa": "TELEFONIA", "valorDocumento": 89.9}),
            ],
        );
        fixtures.insert_children(
            "deputados",
            204554,
            "orgaos",
            vec![json!({"idOrgao": 2003, "siglaOrgao": "CCJC", "dataInicio": "2023-03-01"})],
        );
        fixtures.insert_children(
            "frentes",
            54012,
            "membros",
            vec![json!({"id": 178957, "nome": "Alice Portugal", "titulo": "Coordenador"})],
        );
        fixtures.insert_children(
            "eventos",
            70001,
            "pauta",
            vec![json!({"ordem": 1, "topico": "Apreciação de proposições", "proposicao_": {"id": 2345678}})],
        );

        fixtures
    }
}
