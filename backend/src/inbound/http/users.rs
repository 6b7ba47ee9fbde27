//! User HTTP handlers.
//!
//! ```text
//! POST  /api/v1/users {"name":"Ada","email":"ada@example.com"}
//! GET   /api/v1/users
//! GET   /api/v1/users/{user_id}
//! PATCH /api/v1/users/{user_id} {"email":"ada@lovelace.dev"}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewUser, User, UserChanges};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

pub(crate) const USER_ID: FieldName = FieldName::new("userId");

/// Request body for `POST /api/v1/users`.
///
/// Fields other than `name` and `email` are ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Request body for `PATCH /api/v1/users/{user_id}`.
///
/// Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// User representation returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id().get(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

pub(crate) fn user_bodies(users: Vec<User>) -> Vec<UserBody> {
    users.into_iter().map(UserBody::from).collect()
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest { name, email } = payload.into_inner();
    let new_user = NewUser::new(name, email);
    let user = state.users.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(UserBody::from(user)))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserBody]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(user_bodies(users)))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserBody>> {
    let id = parse_user_id(&path, USER_ID)?;
    let user = state.users_query.get_user(id).await?;
    Ok(web::Json(UserBody::from(user)))
}

/// Partially update a user.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{user_id}",
    params(("user_id" = i64, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UserBody>> {
    let id = parse_user_id(&path, USER_ID)?;
    let UpdateUserRequest { name, email } = payload.into_inner();
    let changes = UserChanges::new(name, email);
    let user = state.users.update_user(id, changes).await?;
    Ok(web::Json(UserBody::from(user)))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
