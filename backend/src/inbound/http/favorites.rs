//! Favourite link handlers and the combined per-user view.
//!
//! ```text
//! GET    /user/{id}/favorites
//! POST   /favorites_planets/{user_id}   {"planet_id":1}
//! DELETE /favorites_planets/{id}
//! POST   /favorites_people/{user_id}    {"people_id":1,"user_id":<same as path>}
//! DELETE /favorites_people/{id}
//! ```

use actix_web::{delete, get, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{
    EntityKind, FavoriteEntry, FavoritePerson, FavoritePersonId, FavoritePlanet,
    FavoritePlanetId, PersonId, PlanetId, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{
    EnvelopeSchema, ErrorSchema, FavoriteEntrySchema, FavoritePersonSchema, FavoritePlanetSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, mismatched_user_error, parse_body};

const PLANET_ID: FieldName = FieldName::new("planet_id");
const PEOPLE_ID: FieldName = FieldName::new("people_id");
const USER_ID: FieldName = FieldName::new("user_id");

/// Request body for `POST /favorites_planets/{user_id}`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoritePlanetRequest {
    #[schema(example = 1)]
    pub planet_id: i32,
}

/// Request body for `POST /favorites_people/{user_id}`.
///
/// `user_id` must repeat the path's user.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoritePersonRequest {
    #[schema(example = 1)]
    pub people_id: i32,
    #[schema(example = 1)]
    pub user_id: i32,
}

/// Every favourite of a user: planet links first, then person links.
#[utoipa::path(
    get,
    path = "/user/{id}/favorites",
    params(("id" = i32, Path, description = "User identity")),
    responses(
        (status = 200, description = "The user's favourites", body = EnvelopeSchema<Vec<FavoriteEntrySchema>>),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["favorites"],
    operation_id = "listUserFavorites"
)]
#[get("/user/{id}/favorites")]
pub async fn list_user_favorites(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<Vec<FavoriteEntry>>>> {
    let entries = state
        .favorites()
        .for_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(Envelope::ok(entries)))
}

/// Favourite a planet for the path's user.
#[utoipa::path(
    post,
    path = "/favorites_planets/{user_id}",
    params(("user_id" = i32, Path, description = "User identity")),
    request_body = CreateFavoritePlanetRequest,
    responses(
        (status = 200, description = "Created link", body = EnvelopeSchema<FavoritePlanetSchema>),
        (status = 400, description = "Missing body or field, or dangling reference", body = ErrorSchema)
    ),
    tags = ["favorites"],
    operation_id = "createFavoritePlanet"
)]
#[post("/favorites_planets/{user_id}")]
pub async fn create_favorite_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<FavoritePlanet>>> {
    let user_id = UserId::new(path.into_inner());
    let request: CreateFavoritePlanetRequest =
        parse_body(&body, EntityKind::FavoritePlanet, &[PLANET_ID])?;

    let link = state
        .favorite_planets
        .create(user_id, PlanetId::new(request.planet_id))
        .await?;
    info!(%user_id, favorite_id = %link.id, "favourite planet created");
    Ok(web::Json(Envelope::ok(link)))
}

/// Remove a favourite planet link.
#[utoipa::path(
    delete,
    path = "/favorites_planets/{id}",
    params(("id" = i32, Path, description = "Link identity")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown link", body = ErrorSchema)
    ),
    tags = ["favorites"],
    operation_id = "deleteFavoritePlanet"
)]
#[delete("/favorites_planets/{id}")]
pub async fn delete_favorite_planet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let id = FavoritePlanetId::new(path.into_inner());
    state.favorite_planets.delete(id).await?;
    info!(favorite_id = %id, "favourite planet deleted");
    Ok(web::Json(Envelope::done()))
}

/// Favourite a person for the path's user.
#[utoipa::path(
    post,
    path = "/favorites_people/{user_id}",
    params(("user_id" = i32, Path, description = "User identity")),
    request_body = CreateFavoritePersonRequest,
    responses(
        (status = 200, description = "Created link", body = EnvelopeSchema<FavoritePersonSchema>),
        (status = 400, description = "Missing body or field, user mismatch, or dangling reference", body = ErrorSchema)
    ),
    tags = ["favorites"],
    operation_id = "createFavoritePerson"
)]
#[post("/favorites_people/{user_id}")]
pub async fn create_favorite_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<FavoritePerson>>> {
    let path_user = path.into_inner();
    let request: CreateFavoritePersonRequest =
        parse_body(&body, EntityKind::FavoritePerson, &[PEOPLE_ID, USER_ID])?;
    if request.user_id != path_user {
        return Err(mismatched_user_error(path_user, request.user_id));
    }

    let user_id = UserId::new(path_user);
    let link = state
        .favorite_people
        .create(user_id, PersonId::new(request.people_id))
        .await?;
    info!(%user_id, favorite_id = %link.id, "favourite person created");
    Ok(web::Json(Envelope::ok(link)))
}

/// Remove a favourite person link.
#[utoipa::path(
    delete,
    path = "/favorites_people/{id}",
    params(("id" = i32, Path, description = "Link identity")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown link", body = ErrorSchema)
    ),
    tags = ["favorites"],
    operation_id = "deleteFavoritePerson"
)]
#[delete("/favorites_people/{id}")]
pub async fn delete_favorite_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let id = FavoritePersonId::new(path.into_inner());
    state.favorite_people.delete(id).await?;
    info!(favorite_id = %id, "favourite person deleted");
    Ok(web::Json(Envelope::done()))
}
