//! Sans-IO client against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then executes requests built by
//! `CamaraApi` over real HTTP using ureq and feeds the responses back into
//! `parse_response`. Validates that request building and response parsing
//! agree with an actual server.

use std::sync::Arc;

use camara_core::{endpoint, ApiError, CamaraApi, Format, HttpResponse, Order, QueryOptions, Response};
use mock_server::MockApi;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: &camara_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut call = agent.get(&req.url);
    for (name, value) in &req.headers {
        call = call.header(name, value);
    }
    let mut response = call.call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse { status, headers, body }
}

fn start_server(state: Arc<MockApi>) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_state(listener, state).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn requests(state: &MockApi) -> Vec<String> {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(state.requests())
}

#[test]
fn round_trip_against_mock_server() {
    let state = Arc::new(MockApi::default());
    let api = CamaraApi::new(&start_server(state.clone()));

    // Step 1: list orgaos with defaults.
    let req = api.build_request(&endpoint::ORGAOS, None, None).unwrap();
    let envelope = api.parse_response(req.format, execute(&req)).unwrap();
    assert_eq!(envelope.total_count, Some(3));
    let siglas: Vec<&str> = envelope
        .data
        .as_json()
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["sigla"].as_str().unwrap())
        .collect();
    assert_eq!(siglas, ["CCJC", "CFT", "PLEN"]);

    // Step 2: single orgao, payload only.
    let req = api
        .build_request(&endpoint::ORGAO, Some(2003), Some(QueryOptions::new().format(Format::Json)))
        .unwrap();
    let envelope = api.parse_response(req.format, execute(&req)).unwrap();
    let full_data = envelope.data.clone();
    let payload = Response::shape(envelope, false).into_data();
    assert_eq!(payload, full_data);
    assert_eq!(payload.as_json().unwrap()["sigla"], "CCJC");

    // Step 3: nested collection with caller sort and paging.
    let options = QueryOptions::new()
        .order_by("dataHoraInicio")
        .order(Order::Desc)
        .items(2);
    let req = api
        .build_request(&endpoint::ORGAO_EVENTOS, Some(2003), Some(options))
        .unwrap();
    let envelope = api.parse_response(req.format, execute(&req)).unwrap();
    assert_eq!(envelope.total_count, Some(3));
    assert_eq!(envelope.next_page(), Some(2));
    assert_eq!(envelope.last_page(), Some(2));
    assert_eq!(envelope.data.as_json().unwrap()[0]["id"], 70004);

    // Step 4: XML comes back as a raw document.
    let req = api
        .build_request(&endpoint::DEPUTADO, Some(160511), Some(QueryOptions::new().format(Format::Xml)))
        .unwrap();
    let envelope = api.parse_response(req.format, execute(&req)).unwrap();
    assert!(envelope.data.as_xml().unwrap().contains("<nome>Tabata Amaral</nome>"));

    // Step 5: unknown ID surfaces the upstream 404.
    let req = api.build_request(&endpoint::BLOCO, Some(1), None).unwrap();
    let err = api.parse_response(req.format, execute(&req)).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ApiError::RequestError { body, .. } if body.contains("Not Found")));

    // Every request above reached the server exactly once.
    let log = requests(&state);
    assert_eq!(log.len(), 5);
    assert_eq!(log[0], "/orgaos?format=json&ordem=ASC&ordenarPor=sigla&pagina=1");
    assert_eq!(log[1], "/orgaos/2003?format=json");
    assert_eq!(log[4], "/blocos/1?format=json");
}

#[test]
fn rejected_requests_never_reach_the_server() {
    let state = Arc::new(MockApi::default());
    let api = CamaraApi::new(&start_server(state.clone()));

    let bad_sort = QueryOptions::new().order_by("invalidField");
    assert!(api.build_request(&endpoint::ORGAOS, None, Some(bad_sort)).is_err());
    assert!(api.build_request(&endpoint::ORGAO_VOTACOES, None, None).is_err());

    assert!(requests(&state).is_empty());
}
