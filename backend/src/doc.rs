//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`]. The
//! generated document backs Swagger UI (debug builds) and the `GET /` route
//! listing, so a handler missing here is also missing from the listing.

use utoipa::OpenApi;

use crate::inbound::http::favorites::{CreateFavoritePersonRequest, CreateFavoritePlanetRequest};
use crate::inbound::http::people::{CreatePersonRequest, UpdatePersonRequest};
use crate::inbound::http::planets::{CreatePlanetRequest, UpdatePlanetRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, FavoriteEntrySchema, FavoritePersonSchema, FavoritePlanetSchema,
    PersonSchema, PlanetSchema, UserSchema,
};
use crate::inbound::http::sitemap::RouteEntry;
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holocron API",
        description = "CRUD over users, planets and people, plus per-user favourites."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::sitemap::list_routes,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::favorites::list_user_favorites,
        crate::inbound::http::planets::list_planets,
        crate::inbound::http::planets::get_planet,
        crate::inbound::http::planets::create_planet,
        crate::inbound::http::planets::update_planet,
        crate::inbound::http::planets::delete_planet,
        crate::inbound::http::people::list_people,
        crate::inbound::http::people::get_person,
        crate::inbound::http::people::create_person,
        crate::inbound::http::people::update_person,
        crate::inbound::http::people::delete_person,
        crate::inbound::http::favorites::create_favorite_planet,
        crate::inbound::http::favorites::delete_favorite_planet,
        crate::inbound::http::favorites::create_favorite_person,
        crate::inbound::http::favorites::delete_favorite_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        PlanetSchema,
        PersonSchema,
        FavoritePlanetSchema,
        FavoritePersonSchema,
        FavoriteEntrySchema,
        RouteEntry,
        CreateUserRequest,
        UpdateUserRequest,
        CreatePlanetRequest,
        UpdatePlanetRequest,
        CreatePersonRequest,
        UpdatePersonRequest,
        CreateFavoritePlanetRequest,
        CreateFavoritePersonRequest,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "planets", description = "Planets"),
        (name = "people", description = "People"),
        (name = "favorites", description = "Per-user favourite planets and people"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "meta", description = "Route listing")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn registers_the_domain_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc
            .components
            .as_ref()
            .map(|components| &components.schemas)
            .expect("components present");

        for name in ["User", "Planet", "Person", "Error", "ErrorCode"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }

    #[rstest]
    fn user_path_has_get_and_post() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serialises");
        let item = &doc["paths"]["/user"];

        assert!(item.get("get").is_some());
        assert!(item.get("post").is_some());
        assert!(item.get("delete").is_none());
    }
}
