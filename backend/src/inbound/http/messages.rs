//! Message HTTP handlers.
//!
//! ```text
//! GET    /api/v1/users/{user_id}/messages
//! POST   /api/v1/users/{user_id}/messages {"content":"hello"}
//! GET    /api/v1/messages/{message_id}
//! PATCH  /api/v1/messages/{message_id} {"content":"edited"}
//! DELETE /api/v1/messages/{message_id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Message, MessageChanges, NewMessage};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::USER_ID;
use crate::inbound::http::validation::{FieldName, parse_message_id, parse_user_id};

const MESSAGE_ID: FieldName = FieldName::new("messageId");

/// Request body for `POST /api/v1/users/{user_id}/messages`.
///
/// The owner comes from the path; a `userId` in the body is ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    #[schema(example = "Hello, world")]
    pub content: String,
}

/// Request body for `PATCH /api/v1/messages/{message_id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// Message representation returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Message> for MessageBody {
    fn from(message: Message) -> Self {
        Self {
            id: message.id().get(),
            user_id: message.user_id().get(),
            content: message.content().to_owned(),
            created_at: message.created_at(),
            updated_at: message.updated_at(),
        }
    }
}

/// List the messages a user has posted.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/messages",
    params(("user_id" = i64, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Messages", body = [MessageBody]),
        (status = 400, description = "Invalid user id", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "listUserMessages"
)]
#[get("/users/{user_id}/messages")]
pub async fn list_user_messages(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MessageBody>>> {
    let owner = parse_user_id(&path, USER_ID)?;
    let messages = state.messages_query.list_user_messages(owner).await?;
    Ok(web::Json(
        messages.into_iter().map(MessageBody::from).collect(),
    ))
}

/// Post a message as the given user.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/messages",
    params(("user_id" = i64, Path, description = "Owner identifier")),
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message created", body = MessageBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "createMessage"
)]
#[post("/users/{user_id}/messages")]
pub async fn create_message(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CreateMessageRequest>,
) -> ApiResult<HttpResponse> {
    let owner = parse_user_id(&path, USER_ID)?;
    let message = NewMessage::new(payload.into_inner().content);
    let created = state.messages.create_message(owner, message).await?;
    Ok(HttpResponse::Created().json(MessageBody::from(created)))
}

/// Fetch one message.
#[utoipa::path(
    get,
    path = "/api/v1/messages/{message_id}",
    params(("message_id" = i64, Path, description = "Message identifier")),
    responses(
        (status = 200, description = "Message", body = MessageBody),
        (status = 400, description = "Invalid message id", body = ErrorSchema),
        (status = 404, description = "Message not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "getMessage"
)]
#[get("/messages/{message_id}")]
pub async fn get_message(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageBody>> {
    let id = parse_message_id(&path, MESSAGE_ID)?;
    let message = state.messages_query.get_message(id).await?;
    Ok(web::Json(MessageBody::from(message)))
}

/// Edit a message's content.
#[utoipa::path(
    patch,
    path = "/api/v1/messages/{message_id}",
    params(("message_id" = i64, Path, description = "Message identifier")),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "Updated message", body = MessageBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Message not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "updateMessage"
)]
#[patch("/messages/{message_id}")]
pub async fn update_message(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateMessageRequest>,
) -> ApiResult<web::Json<MessageBody>> {
    let id = parse_message_id(&path, MESSAGE_ID)?;
    let changes = MessageChanges::new(payload.into_inner().content);
    let message = state.messages.update_message(id, changes).await?;
    Ok(web::Json(MessageBody::from(message)))
}

/// Delete a message.
#[utoipa::path(
    delete,
    path = "/api/v1/messages/{message_id}",
    params(("message_id" = i64, Path, description = "Message identifier")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 400, description = "Invalid message id", body = ErrorSchema),
        (status = 404, description = "Message not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["messages"],
    operation_id = "deleteMessage"
)]
#[delete("/messages/{message_id}")]
pub async fn delete_message(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_message_id(&path, MESSAGE_ID)?;
    state.messages.delete_message(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
