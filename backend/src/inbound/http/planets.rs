//! Planet API handlers.
//!
//! ```text
//! GET    /planets
//! GET    /planets/{id}
//! POST   /planets        {"name":"Tatooine","diameter":10465}
//! PUT    /planets/{id}   {"diameter":null}
//! DELETE /planets/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{EntityKind, NewPlanet, Planet, PlanetId, PlanetPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{EnvelopeSchema, ErrorSchema, PlanetSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldLimit, FieldName, parse_limited_body};

const NAME: FieldName = FieldName::new("name");

const LIMITS: [FieldLimit; 1] = [FieldLimit::new(NAME, 50)];

/// Request body for `POST /planets`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetRequest {
    #[schema(example = "Tatooine", max_length = 50)]
    pub name: String,
    #[serde(default)]
    pub diameter: Option<i32>,
    #[serde(default)]
    pub rotation_period: Option<i32>,
}

/// Request body for `PUT /planets/{id}`.
///
/// An absent field is left unchanged; an explicit `null` clears a nullable
/// column.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlanetRequest {
    #[serde(default)]
    #[schema(max_length = 50)]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub diameter: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub rotation_period: Option<Option<i32>>,
}

/// List every planet.
#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = EnvelopeSchema<Vec<PlanetSchema>>),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "listPlanets"
)]
#[get("/planets")]
pub async fn list_planets(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Envelope<Vec<Planet>>>> {
    let planets = state.planets.list().await?;
    Ok(web::Json(Envelope::ok(planets)))
}

/// Fetch one planet.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet identity")),
    responses(
        (status = 200, description = "The planet", body = EnvelopeSchema<PlanetSchema>),
        (status = 404, description = "Unknown planet", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "getPlanet"
)]
#[get("/planets/{id}")]
pub async fn get_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<Planet>>> {
    let planet = state.planets.get(PlanetId::new(path.into_inner())).await?;
    Ok(web::Json(Envelope::ok(planet)))
}

/// Add a planet.
#[utoipa::path(
    post,
    path = "/planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 200, description = "Created planet", body = EnvelopeSchema<PlanetSchema>),
        (status = 400, description = "Missing body or field", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "createPlanet"
)]
#[post("/planets")]
pub async fn create_planet(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<Planet>>> {
    let request: CreatePlanetRequest =
        parse_limited_body(&body, EntityKind::Planet, &[NAME], &LIMITS)?;
    let planet = state
        .planets
        .create(NewPlanet {
            name: request.name,
            diameter: request.diameter,
            rotation_period: request.rotation_period,
        })
        .await?;
    info!(planet_id = %planet.id, "planet created");
    Ok(web::Json(Envelope::ok(planet)))
}

/// Update the fields present in the body.
#[utoipa::path(
    put,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet identity")),
    request_body = UpdatePlanetRequest,
    responses(
        (status = 200, description = "Updated planet", body = EnvelopeSchema<PlanetSchema>),
        (status = 400, description = "Missing body", body = ErrorSchema),
        (status = 404, description = "Unknown planet", body = ErrorSchema),
        (status = 409, description = "Name already taken", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "updatePlanet"
)]
#[put("/planets/{id}")]
pub async fn update_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<Planet>>> {
    let id = PlanetId::new(path.into_inner());
    let request: UpdatePlanetRequest = parse_limited_body(&body, EntityKind::Planet, &[], &LIMITS)?;
    let planet = state
        .planets
        .update(
            id,
            PlanetPatch {
                name: request.name,
                diameter: request.diameter,
                rotation_period: request.rotation_period,
            },
        )
        .await?;
    info!(planet_id = %id, "planet updated");
    Ok(web::Json(Envelope::ok(planet)))
}

/// Delete a planet and every favourite pointing at it.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet identity")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown planet", body = ErrorSchema)
    ),
    tags = ["planets"],
    operation_id = "deletePlanet"
)]
#[delete("/planets/{id}")]
pub async fn delete_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let id = PlanetId::new(path.into_inner());
    state.planets.delete(id).await?;
    info!(planet_id = %id, "planet deleted");
    Ok(web::Json(Envelope::done()))
}
