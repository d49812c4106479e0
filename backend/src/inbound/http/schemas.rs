//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and live in the inbound layer
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The write collides with an existing record.
    #[schema(rename = "conflict")]
    Conflict,
    /// The backing store cannot be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "planet 7 not found")]
    msg: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Supplementary details, e.g. the missing field.
    details: Option<serde_json::Value>,
}

/// Success envelope; see [`super::envelope::Envelope`].
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnvelopeSchema<T> {
    /// Always `"ok"`.
    #[schema(example = "ok")]
    msg: String,
    /// The payload; absent for deletes.
    inf: Option<T>,
}

/// OpenAPI schema for [`crate::domain::User`]. The password hash is never
/// serialised.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Luke Skywalker")]
    name: String,
    #[schema(example = "luke@rebellion.example")]
    email: String,
    is_active: bool,
}

/// OpenAPI schema for [`crate::domain::Planet`].
#[derive(ToSchema)]
#[schema(as = Planet)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PlanetSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Tatooine")]
    name: String,
    #[schema(example = 10465)]
    diameter: Option<i32>,
    #[schema(example = 23)]
    rotation_period: Option<i32>,
}

/// OpenAPI schema for [`crate::domain::Person`].
#[derive(ToSchema)]
#[schema(as = Person)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PersonSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Leia Organa")]
    name: String,
    #[schema(example = 150)]
    height: Option<i32>,
    #[schema(example = 49)]
    mass: Option<i32>,
    #[schema(example = "brown")]
    hair_color: Option<String>,
}

/// OpenAPI schema for [`crate::domain::FavoritePlanet`].
#[derive(ToSchema)]
#[schema(as = FavoritePlanet)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FavoritePlanetSchema {
    id: i32,
    planet_id: i32,
    user_id: i32,
}

/// OpenAPI schema for [`crate::domain::FavoritePerson`].
#[derive(ToSchema)]
#[schema(as = FavoritePerson)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FavoritePersonSchema {
    id: i32,
    people_id: i32,
    user_id: i32,
}

/// OpenAPI schema for [`crate::domain::FavoriteEntry`]. Exactly one of
/// `planet_id` and `people_id` is present.
#[derive(ToSchema)]
#[schema(as = FavoriteEntry)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FavoriteEntrySchema {
    id: i32,
    planet_id: Option<i32>,
    people_id: Option<i32>,
    user_id: i32,
}
