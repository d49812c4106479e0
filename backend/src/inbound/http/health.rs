//! Liveness and readiness probes.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, ResponseError, get, http::header, web};

use crate::domain::Error;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::ErrorSchema;

/// Readiness and liveness flags shared with the server bootstrap.
///
/// Starts live but not ready; the bootstrap marks it ready once the listener
/// is bound and the store is reachable.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a state that is live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready to take traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as draining so liveness probes fail.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether readiness probes succeed.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether liveness probes succeed.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn probe_response(probe_ok: bool, failure: &str) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok().json(Envelope::done())
    } else {
        Error::service_unavailable(failure).error_response()
    };
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Ready to handle traffic"),
        (status = 503, description = "Not ready", body = ErrorSchema)
    ),
    tags = ["health"]
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready(), "not ready")
}

/// Liveness probe; fails once the process starts draining.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Alive"),
        (status = 503, description = "Shutting down", body = ErrorSchema)
    ),
    tags = ["health"]
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive(), "shutting down")
}
