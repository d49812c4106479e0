//! User API handlers.
//!
//! ```text
//! GET    /user
//! GET    /user/{id}
//! POST   /user        {"name":"Luke","email":"luke@rebellion.example","password":"x"}
//! PUT    /user/{id}   {"is_active":false}
//! DELETE /user/{id}
//! ```
//!
//! Passwords are hashed on the blocking pool before they reach the store and
//! are never serialised back.

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::{
    EntityKind, Error, NewUser, PasswordError, PasswordHash, User, UserId, UserPatch,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{EnvelopeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldLimit, FieldName, parse_limited_body};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");
const PASSWORD: FieldName = FieldName::new("password");

const LIMITS: [FieldLimit; 2] = [FieldLimit::new(NAME, 50), FieldLimit::new(EMAIL, 120)];

/// Request body for `POST /user`.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Luke Skywalker", max_length = 50)]
    pub name: String,
    #[schema(example = "luke@rebellion.example", max_length = 120)]
    pub email: String,
    #[schema(example = "use-the-force")]
    pub password: String,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Request body for `PUT /user/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[schema(max_length = 50)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(max_length = 120)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

fn map_password_error(err: PasswordError) -> Error {
    match err {
        PasswordError::Empty => Error::invalid_request("password must not be empty")
            .with_details(serde_json::json!({ "field": "password", "code": "empty_password" })),
        PasswordError::Hashing { message } => {
            Error::internal(format!("password hashing failed: {message}"))
        }
    }
}

async fn hash_password(plaintext: String) -> Result<PasswordHash, Error> {
    web::block(move || PasswordHash::from_plaintext(&plaintext))
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
        .map_err(map_password_error)
}

/// List every user.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users", body = EnvelopeSchema<Vec<UserSchema>>),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/user")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Envelope<Vec<User>>>> {
    let users = state.users.list().await?;
    Ok(web::Json(Envelope::ok(users)))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i32, Path, description = "User identity")),
    responses(
        (status = 200, description = "The user", body = EnvelopeSchema<UserSchema>),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<User>>> {
    let user = state.users.get(UserId::new(path.into_inner())).await?;
    Ok(web::Json(Envelope::ok(user)))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = EnvelopeSchema<UserSchema>),
        (status = 400, description = "Missing body or field", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<User>>> {
    let request: CreateUserRequest =
        parse_limited_body(&body, EntityKind::User, &[NAME, EMAIL, PASSWORD], &LIMITS)?;
    let password = hash_password(request.password).await?;

    let user = state
        .users
        .create(NewUser {
            name: request.name,
            email: request.email,
            password,
            is_active: request.is_active.unwrap_or(true),
        })
        .await?;
    info!(user_id = %user.id, "user created");
    Ok(web::Json(Envelope::ok(user)))
}

/// Update the fields present in the body.
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = i32, Path, description = "User identity")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = EnvelopeSchema<UserSchema>),
        (status = 400, description = "Missing body", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<web::Json<Envelope<User>>> {
    let id = UserId::new(path.into_inner());
    let request: UpdateUserRequest = parse_limited_body(&body, EntityKind::User, &[], &LIMITS)?;
    let password = match request.password {
        Some(plaintext) => Some(hash_password(plaintext).await?),
        None => None,
    };

    let user = state
        .users
        .update(
            id,
            UserPatch {
                name: request.name,
                email: request.email,
                password,
                is_active: request.is_active,
            },
        )
        .await?;
    info!(user_id = %id, "user updated");
    Ok(web::Json(Envelope::ok(user)))
}

/// Delete a user and their favourites.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = i32, Path, description = "User identity")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let id = UserId::new(path.into_inner());
    state.users.delete(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(web::Json(Envelope::done()))
}
