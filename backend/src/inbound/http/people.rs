//! Person API handlers.
//!
//! ```text
//! GET    /people
//! GET    /people/{id}
//! POST   /people        {"name":"Leia Organa","height":150}
//! PUT    /people/{id}   {"hair_color":"brown"}
//! DELETE /people/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{EntityKind, NewPerson, Person, PersonId, PersonPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{EnvelopeSchema, ErrorSchema, PersonSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldLimit, FieldName, parse_limited_body};

const NAME: FieldName = FieldName::new("name");
const HAIR_COLOR: FieldName = FieldName::new("hair_color");

const LIMITS: [FieldLimit; 2] = [FieldLimit::new(NAME, 50), FieldLimit::new(HAIR_COLOR, 50)];

/// Request body for `POST /people`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePersonRequest {
    #[schema(example = "Leia Organa", max_length = 50)]
    pub name: String,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub mass: Option<i32>,
    #[serde(default)]
    #[schema(max_length = 50)]
    pub hair_color: Option<String>,
}

/// Request body for `PUT /people/{id}`; `null` clears a nullable column.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    #[schema(max_length = 50)]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub height: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub mass: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, max_length = 50)]
    pub hair_color: Option<Option<String>>,
}

impl From<UpdatePersonRequest> for PersonPatch {
    fn from(request: UpdatePersonRequest) -> Self {
        Self {
            name: request.name,
            height: request.height,
            mass: request.mass,
            hair_color: request.hair_color,
        }
    }
}

/// List every person.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people", body = EnvelopeSchema<Vec<PersonSchema>>),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Envelope<Vec<Person>>>> {
    let people = state.people.list().await?;
    Ok(web::Json(Envelope::ok(people)))
}

/// Fetch one person.
#[utoipa::path(
    get,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Person identity")),
    responses(
        (status = 200, description = "The person", body = EnvelopeSchema<PersonSchema>),
        (status = 404, description = "Unknown person", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
#[get("/people/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<Person>>> {
    let person = state.people.get(PersonId::new(path.into_inner())).await?;
    Ok(web::Json(Envelope::ok(person)))
}

/// Add a person.
#[utoipa::path(
    post,
    path = "/people",
    request_body = CreatePersonRequest,
    responses(
        (status = 200, description = "Created person", body = EnvelopeSchema<PersonSchema>),
        (status = 400, description = "Missing body or field", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "createPerson"
)]
#[post("/people")]
pub async fn create_person(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<Person>>> {
    let request: CreatePersonRequest =
        parse_limited_body(&body, EntityKind::Person, &[NAME], &LIMITS)?;
    let person = state
        .people
        .create(NewPerson {
            name: request.name,
            height: request.height,
            mass: request.mass,
            hair_color: request.hair_color,
        })
        .await?;
    info!(person_id = %person.id, "person created");
    Ok(web::Json(Envelope::ok(person)))
}

/// Update the fields present in the body.
#[utoipa::path(
    put,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Person identity")),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Updated person", body = EnvelopeSchema<PersonSchema>),
        (status = 400, description = "Missing body", body = ErrorSchema),
        (status = 404, description = "Unknown person", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "updatePerson"
)]
#[put("/people/{id}")]
pub async fn update_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<Person>>> {
    let id = PersonId::new(path.into_inner());
    let request: UpdatePersonRequest = parse_limited_body(&body, EntityKind::Person, &[], &LIMITS)?;
    let person = state.people.update(id, request.into()).await?;
    info!(person_id = %id, "person updated");
    Ok(web::Json(Envelope::ok(person)))
}

/// Delete a person and every favourite pointing at them.
#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Person identity")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown person", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "deletePerson"
)]
#[delete("/people/{id}")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let id = PersonId::new(path.into_inner());
    state.people.delete(id).await?;
    info!(person_id = %id, "person deleted");
    Ok(web::Json(Envelope::done()))
}
