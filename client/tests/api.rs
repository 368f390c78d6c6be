//! `CamaraClient` against the live mock server.
//!
//! Each test starts its own server on a random port so the request logs do
//! not interfere.

use std::sync::Arc;

use camara_client::{endpoint, ApiError, CamaraClient, Format, Order, Payload, QueryOptions, Response};
use mock_server::MockApi;
use serde_json::json;

async fn start() -> (CamaraClient, Arc<MockApi>) {
    let state = Arc::new(MockApi::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run_with_state(listener, state.clone()));
    (CamaraClient::new(&format!("http://{addr}")), state)
}

fn json_data(response: Response) -> serde_json::Value {
    response.into_data().into_json().unwrap()
}

// --- shaping ---

#[tokio::test]
async fn get_orgao_returns_payload_only() {
    let (client, state) = start().await;

    let response = client.get_orgao(2003, Format::Json, false).await.unwrap();

    assert!(!response.is_full());
    assert_eq!(json_data(response)["sigla"], "CCJC");
    assert_eq!(state.requests().await, ["/orgaos/2003?format=json"]);
}

#[tokio::test]
async fn payload_equals_full_envelope_data() {
    let (client, _state) = start().await;

    let full = client.get_deputados(None, true).await.unwrap();
    let data = client.get_deputados(None, false).await.unwrap();

    assert_eq!(data.into_data(), full.envelope().unwrap().data);
}

#[tokio::test]
async fn get_orgao_eventos_full_envelope_has_pagination() {
    let (client, state) = start().await;

    let options = QueryOptions::new().order_by("dataHoraInicio").items(2);
    let response = client.get_orgao_eventos(2003, Some(options), true).await.unwrap();

    let envelope = response.envelope().unwrap();
    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.total_count, Some(3));
    assert_eq!(envelope.next_page(), Some(2));
    assert!(envelope.link("self").is_some());
    assert_eq!(envelope.data.as_json().unwrap()[0]["id"], 70001);
    assert_eq!(
        state.requests().await,
        ["/orgaos/2003/eventos?format=json&itens=2&ordem=ASC&ordenarPor=dataHoraInicio&pagina=1"]
    );
}

#[tokio::test]
async fn filters_and_order_reach_the_server() {
    let (client, _state) = start().await;

    let options = QueryOptions::new()
        .param("siglaUf", "BA")
        .order_by("nome")
        .order(Order::Desc);
    let dados = json_data(client.get_deputados(Some(options), false).await.unwrap());

    let nomes: Vec<&str> = dados
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["nome"].as_str().unwrap())
        .collect();
    assert_eq!(nomes, ["Alice Portugal", "Abílio Santana"]);
}

#[tokio::test]
async fn xml_format_returns_raw_document() {
    let (client, _state) = start().await;

    let payload = client.get_bloco(594, Format::Xml, false).await.unwrap().into_data();

    match payload {
        Payload::Xml(doc) => assert!(doc.contains("<nome>Federação Brasil da Esperança</nome>")),
        Payload::Json(_) => panic!("expected XML"),
    }
}

#[tokio::test]
async fn payload_deserializes_into_caller_types() {
    #[derive(serde::Deserialize)]
    struct Frente {
        id: u64,
        titulo: String,
    }

    let (client, _state) = start().await;
    let frentes: Vec<Frente> = client
        .get_frentes(None, false)
        .await
        .unwrap()
        .into_data()
        .deserialize()
        .unwrap();

    assert_eq!(frentes.len(), 2);
    assert!(frentes.iter().any(|f| f.id == 54012 && f.titulo.contains("Educação")));
}

// --- failures before I/O ---

#[tokio::test]
async fn invalid_sort_field_sends_nothing() {
    let (client, state) = start().await;

    let err = client
        .get_orgaos(Some(QueryOptions::new().order_by("invalidField")), false)
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::InvalidParameter("invalidField".to_string()));
    assert!(state.requests().await.is_empty());
}

#[tokio::test]
async fn every_endpoint_rejects_unknown_filter_keys() {
    let (client, state) = start().await;

    for endpoint in endpoint::ALL {
        let options = QueryOptions::new().param("naoExiste", "1");
        let err = client
            .fetch(endpoint, Some(2003), Some(options), false)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::InvalidParameter("naoExiste".to_string()),
            "{}",
            endpoint.name
        );
    }
    assert!(state.requests().await.is_empty());
}

#[tokio::test]
async fn every_endpoint_rejects_csv() {
    let (client, state) = start().await;

    for endpoint in endpoint::ALL {
        let options = QueryOptions::new().param("format", "csv");
        let err = client
            .fetch(endpoint, Some(2003), Some(options), true)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::InvalidFormat("csv".to_string()), "{}", endpoint.name);
    }
    assert!(state.requests().await.is_empty());
}

#[tokio::test]
async fn every_id_endpoint_requires_an_id() {
    let (client, state) = start().await;

    for endpoint in endpoint::ALL.iter().filter(|e| e.requires_id()) {
        let err = client.fetch(endpoint, None, None, false).await.unwrap_err();
        assert_eq!(err, ApiError::MissingParameter("id"), "{}", endpoint.name);
    }
    let err = client.get_orgao_membros(0, None, false).await.unwrap_err();
    assert_eq!(err, ApiError::MissingParameter("id"));
    assert!(state.requests().await.is_empty());
}

// --- failures on the wire ---

#[tokio::test]
async fn unknown_id_is_a_404_request_error() {
    let (client, _state) = start().await;

    let err = client.get_evento(1, Format::Json, false).await.unwrap_err();

    assert!(err.is_not_found());
}

// --- surface ---

#[tokio::test]
async fn every_resource_function_succeeds() {
    let (client, state) = start().await;

    let results = vec![
        client.get_orgaos(None, false).await,
        client.get_orgao(2003, Format::Json, false).await,
        client.get_orgao_eventos(2003, None, false).await,
        client.get_orgao_membros(2003, None, false).await,
        client.get_orgao_votacoes(2003, None, false).await,
        client.get_deputados(None, false).await,
        client.get_deputado(204554, Format::Json, false).await,
        client.get_deputado_despesas(204554, None, false).await,
        client.get_deputado_discursos(204554, None, false).await,
        client.get_deputado_eventos(204554, None, false).await,
        client.get_deputado_frentes(204554, None, false).await,
        client.get_deputado_orgaos(204554, None, false).await,
        client.get_blocos(None, false).await,
        client.get_bloco(594, Format::Json, false).await,
        client.get_frentes(None, false).await,
        client.get_frente(54012, Format::Json, false).await,
        client.get_frente_membros(54012, None, false).await,
        client.get_eventos(None, false).await,
        client.get_evento(70001, Format::Json, false).await,
        client.get_evento_deputados(70001, None, false).await,
        client.get_evento_orgaos(70001, None, false).await,
        client.get_evento_pauta(70001, None, false).await,
        client.get_evento_votacoes(70001, None, false).await,
    ];

    for (i, result) in results.into_iter().enumerate() {
        assert!(result.is_ok(), "call {i}: {:?}", result.err());
    }
    assert_eq!(state.requests().await.len(), endpoint::ALL.len());
}

#[tokio::test]
async fn despesas_sorted_by_month() {
    let (client, _state) = start().await;

    let options = QueryOptions::new().order_by("mes");
    let dados = json_data(client.get_deputado_despesas(204554, Some(options), false).await.unwrap());

    assert_eq!(dados[0]["mes"], json!(1));
    assert_eq!(dados[1]["mes"], json!(2));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let (client, state) = start().await;

    let (orgaos, deputados, eventos) = tokio::join!(
        client.get_orgaos(None, true),
        client.get_deputados(None, true),
        client.get_eventos(None, true),
    );

    assert_eq!(orgaos.unwrap().envelope().unwrap().total_count, Some(3));
    assert_eq!(deputados.unwrap().envelope().unwrap().total_count, Some(3));
    assert_eq!(eventos.unwrap().envelope().unwrap().total_count, Some(2));
    assert_eq!(state.requests().await.len(), 3);
}
