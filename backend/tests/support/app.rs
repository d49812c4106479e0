//! In-process harness mirroring the production app wiring.

use actix_web::http::StatusCode;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;

use holocron::Trace;
use holocron::inbound::http::configure_routes;
use holocron::inbound::http::health::{HealthState, live, ready};
use holocron::inbound::http::state::HttpState;
use holocron::middleware::trace::TRACE_ID_HEADER;
use holocron::outbound::memory::InMemoryStore;

/// Response captured from one request.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// State over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::from_store(InMemoryStore::new())
}

/// Send `request` through the full middleware stack over `state`.
pub async fn call(state: &HttpState, request: TestRequest) -> Reply {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    let app = test::init_service(
        App::new()
            .app_data(health)
            .app_data(web::Data::new(state.clone()))
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Trace)
            .configure(configure_routes)
            .service(ready)
            .service(live),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    Reply {
        status,
        trace_id,
        body,
    }
}

/// `POST` a JSON body and return the created record's `id`.
pub async fn create(state: &HttpState, uri: &str, body: Value) -> i64 {
    let reply = call(state, TestRequest::post().uri(uri).set_json(body)).await;
    assert_eq!(reply.status, StatusCode::OK, "creating via {uri}: {}", reply.body);
    reply.body["inf"]["id"].as_i64().expect("created record has an id")
}
