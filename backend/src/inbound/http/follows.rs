//! Follow graph HTTP handlers.
//!
//! ```text
//! GET    /api/v1/users/{user_id}/following
//! GET    /api/v1/users/{user_id}/followers
//! GET    /api/v1/users/{user_id}/following/{other_id}
//! PUT    /api/v1/users/{user_id}/following/{other_id}
//! DELETE /api/v1/users/{user_id}/following/{other_id}
//! ```
//!
//! `PUT` and `DELETE` are idempotent and answer 204 whether or not the edge
//! changed.

use actix_web::{HttpResponse, delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{USER_ID, UserBody, user_bodies};
use crate::inbound::http::validation::{FieldName, parse_user_id};

const OTHER_ID: FieldName = FieldName::new("otherId");

/// Relationship between two users as seen from the first.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipBody {
    /// The user follows the other user.
    pub following: bool,
    /// The other user follows the user.
    pub followed_by: bool,
}

fn parse_pair(path: &(String, String)) -> Result<(UserId, UserId), Error> {
    let (user, other) = path;
    Ok((parse_user_id(user, USER_ID)?, parse_user_id(other, OTHER_ID)?))
}

/// Users the given user follows.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/following",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Followed users", body = [UserBody]),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "listFollowing"
)]
#[get("/users/{user_id}/following")]
pub async fn list_following(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<UserBody>>> {
    let id = parse_user_id(&path, USER_ID)?;
    let users = state.follows_query.following(id).await?;
    Ok(web::Json(user_bodies(users)))
}

/// Users following the given user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/followers",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Followers", body = [UserBody]),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "listFollowers"
)]
#[get("/users/{user_id}/followers")]
pub async fn list_followers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<UserBody>>> {
    let id = parse_user_id(&path, USER_ID)?;
    let users = state.follows_query.followers(id).await?;
    Ok(web::Json(user_bodies(users)))
}

/// Whether the two users follow each other, in either direction.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/following/{other_id}",
    params(
        ("user_id" = i64, Path, description = "User identifier"),
        ("other_id" = i64, Path, description = "Other user identifier")
    ),
    responses(
        (status = 200, description = "Relationship", body = RelationshipBody),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "getRelationship"
)]
#[get("/users/{user_id}/following/{other_id}")]
pub async fn get_relationship(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<RelationshipBody>> {
    let (user, other) = parse_pair(&path)?;
    state.users_query.get_user(user).await?;
    state.users_query.get_user(other).await?;
    let following = state.follows_query.is_following(user, other).await?;
    let followed_by = state.follows_query.is_followed_by(user, other).await?;
    Ok(web::Json(RelationshipBody {
        following,
        followed_by,
    }))
}

/// Follow another user.
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}/following/{other_id}",
    params(
        ("user_id" = i64, Path, description = "Follower identifier"),
        ("other_id" = i64, Path, description = "Identifier of the user to follow")
    ),
    responses(
        (status = 204, description = "Following"),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "followUser"
)]
#[put("/users/{user_id}/following/{other_id}")]
pub async fn follow_user(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (user, other) = parse_pair(&path)?;
    state.follows.follow(user, other).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Stop following another user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/following/{other_id}",
    params(
        ("user_id" = i64, Path, description = "Follower identifier"),
        ("other_id" = i64, Path, description = "Identifier of the user to unfollow")
    ),
    responses(
        (status = 204, description = "Not following"),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["follows"],
    operation_id = "unfollowUser"
)]
#[delete("/users/{user_id}/following/{other_id}")]
pub async fn unfollow_user(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (user, other) = parse_pair(&path)?;
    state.follows.unfollow(user, other).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "follows_tests.rs"]
mod tests;
