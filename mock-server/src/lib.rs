//! In-process fake of the Câmara open-data API.
//!
//! Serves `fixtures::Fixtures` through the same `{dados, links}` envelope,
//! pagination links and `x-total-count` header the real API uses, and
//! records every request URI so tests can assert what went over the wire.

pub mod fixtures;

use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

pub use fixtures::Fixtures;

const DEFAULT_ITEMS: usize = 15;
const STANDARD_PARAMS: &[&str] = &["pagina", "itens", "ordem", "ordenarPor", "format"];

/// Shared server state: fixture data plus the request log.
#[derive(Debug, Default)]
pub struct MockApi {
    fixtures: Fixtures,
    requests: RwLock<Vec<String>>,
}

impl MockApi {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures,
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Every request URI (path and query) received so far, in order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

pub type Db = Arc<MockApi>;

type Params = HashMap<String, String>;

pub fn app() -> Router {
    app_with_state(Arc::new(MockApi::default()))
}

pub fn app_with_state(state: Db) -> Router {
    Router::new()
        .route("/{resource}", get(list_resource))
        .route("/{resource}/{id}", get(get_resource))
        .route("/{resource}/{id}/{sub}", get(list_children))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_state(listener: TcpListener, state: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn record_request(State(db): State<Db>, request: Request, next: Next) -> Response {
    let uri = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_string(), |pq| pq.as_str().to_string());
    tracing::debug!(%uri, "request");
    db.requests.write().await.push(uri);
    next.run(request).await
}

async fn list_resource(
    State(db): State<Db>,
    Path(resource): Path<String>,
    Query(params): Query<Params>,
) -> Response {
    match db.fixtures.collection(&resource) {
        Some(items) => list_response(items.to_vec(), &params, &format!("/{resource}")),
        None => not_found(),
    }
}

async fn get_resource(
    State(db): State<Db>,
    Path((resource, id)): Path<(String, u64)>,
    Query(params): Query<Params>,
) -> Response {
    let Some(item) = db.fixtures.item(&resource, id) else {
        return not_found();
    };
    let links = vec![link("self", &format!("/{resource}/{id}"))];
    envelope_response(item.clone(), links, None, &params)
}

async fn list_children(
    State(db): State<Db>,
    Path((resource, id, sub)): Path<(String, u64, String)>,
    Query(params): Query<Params>,
) -> Response {
    match db.fixtures.children(&resource, id, &sub) {
        Some(items) => list_response(items, &params, &format!("/{resource}/{id}/{sub}")),
        None => not_found(),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": 404, "title": "Not Found"})),
    )
        .into_response()
}

fn bad_request(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"status": 400, "title": "Bad Request", "detail": detail})),
    )
        .into_response()
}

/// Filter, sort and paginate `items` according to the query parameters.
fn list_response(mut items: Vec<Value>, params: &Params, path: &str) -> Response {
    let page = match parse_positive(params, "pagina", 1) {
        Ok(page) => page,
        Err(resp) => return resp,
    };
    let per_page = match parse_positive(params, "itens", DEFAULT_ITEMS) {
        Ok(n) => n,
        Err(resp) => return resp,
    };

    // Filters only apply to records that carry the field.
    items.retain(|item| {
        params
            .iter()
            .filter(|(k, _)| !STANDARD_PARAMS.contains(&k.as_str()))
            .all(|(k, v)| item.get(k).is_none_or(|field| render_scalar(field) == *v))
    });

    if let Some(field) = params.get("ordenarPor") {
        items.sort_by(|a, b| compare_values(&a[field], &b[field]));
    }
    if params
        .get("ordem")
        .is_some_and(|o| o.eq_ignore_ascii_case("DESC"))
    {
        items.reverse();
    }

    let total = items.len();
    let last = total.div_ceil(per_page).max(1);
    let dados: Vec<Value> = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    let page_href = |n: usize| format!("{path}?pagina={n}&itens={per_page}");
    let mut links = vec![link("self", &page_href(page))];
    if page > 1 {
        links.push(link("previous", &page_href(page - 1)));
    }
    if page < last {
        links.push(link("next", &page_href(page + 1)));
    }
    links.push(link("first", &page_href(1)));
    links.push(link("last", &page_href(last)));

    envelope_response(Value::Array(dados), links, Some(total), params)
}

fn parse_positive(params: &Params, key: &str, default: usize) -> Result<usize, Response> {
    match params.get(key) {
        None => Ok(default),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(bad_request(&format!("{key} must be a positive integer"))),
        },
    }
}

fn envelope_response(dados: Value, links: Vec<Value>, total: Option<usize>, params: &Params) -> Response {
    let body = json!({"dados": dados, "links": links});
    let xml = params
        .get("format")
        .is_some_and(|f| f.eq_ignore_ascii_case("xml"));

    let mut response = if xml {
        let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
        write_xml(&mut doc, "xml", &body);
        ([(header::CONTENT_TYPE, "application/xml")], doc).into_response()
    } else {
        Json(body).into_response()
    };

    if let Some(total) = total {
        response
            .headers_mut()
            .insert("x-total-count", HeaderValue::from(total));
    }
    response
}

fn link(rel: &str, href: &str) -> Value {
    json!({"rel": rel, "href": href})
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => render_scalar(a).cmp(&render_scalar(b)),
    }
}

fn write_xml(out: &mut String, tag: &str, value: &Value) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                write_xml(out, k, v);
            }
        }
        Value::Array(items) => {
            for item in items {
                write_xml(out, "registro", item);
            }
        }
        Value::Null => {}
        scalar => out.push_str(&escape_xml(&render_scalar(scalar))),
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
