//! Test helpers for inbound HTTP components.

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::Value;

use super::configure_routes;
use super::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// State backed by a fresh in-memory store.
pub fn memory_state() -> HttpState {
    HttpState::from_store(InMemoryStore::new())
}

/// Serve `request` through the full route table over `state`.
///
/// Returns the status and the JSON body (`Value::Null` for an empty body).
/// A fresh app is built per call; state persists through the shared store.
pub async fn send(state: &HttpState, request: TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is JSON")
    };
    (status, json)
}
