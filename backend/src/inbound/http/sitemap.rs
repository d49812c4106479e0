//! `GET /`: a machine-readable listing of every route the API serves.
//!
//! The listing is derived from the OpenAPI document so it cannot drift from
//! the registered handlers.

use std::sync::OnceLock;

use actix_web::{get, web};
use serde::Serialize;
use serde_json::Value;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;

use crate::doc::ApiDoc;
use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::EnvelopeSchema;

const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// One `(method, path)` pair. Orders by path, then method.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, utoipa::ToSchema)]
pub struct RouteEntry {
    /// Path template, e.g. `/user/{id}`.
    #[schema(example = "/user/{id}")]
    pub path: String,
    /// Upper-case HTTP method.
    #[schema(example = "GET")]
    pub method: String,
}

/// Flatten the paths of `document` into sorted route entries.
///
/// # Errors
///
/// Fails only if the document cannot be serialised.
pub fn route_listing(document: &OpenApiDocument) -> Result<Vec<RouteEntry>, serde_json::Error> {
    let value = serde_json::to_value(document)?;
    let mut routes: Vec<RouteEntry> = value
        .get("paths")
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
        .flat_map(|(path, item)| {
            METHODS
                .iter()
                .filter(move |method| item.get(**method).is_some())
                .map(move |method| RouteEntry {
                    path: path.clone(),
                    method: method.to_ascii_uppercase(),
                })
        })
        .collect();
    routes.sort();
    Ok(routes)
}

fn cached_routes() -> Result<&'static [RouteEntry], Error> {
    static ROUTES: OnceLock<Vec<RouteEntry>> = OnceLock::new();
    if let Some(routes) = ROUTES.get() {
        return Ok(routes.as_slice());
    }
    let routes = route_listing(&ApiDoc::openapi())
        .map_err(|err| Error::internal(format!("route listing failed: {err}")))?;
    Ok(ROUTES.get_or_init(|| routes).as_slice())
}

/// List every route.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Registered routes", body = EnvelopeSchema<Vec<RouteEntry>>)
    ),
    tags = ["meta"],
    operation_id = "listRoutes"
)]
#[get("/")]
pub async fn list_routes() -> ApiResult<web::Json<Envelope<Vec<RouteEntry>>>> {
    Ok(web::Json(Envelope::ok(cached_routes()?.to_vec())))
}
