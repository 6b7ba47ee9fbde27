//! OpenAPI document for the REST API.
//!
//! Registers every handler in `inbound::http` plus the error schema wrappers.
//! Served by Swagger UI in debug builds and printed by `openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::follows::RelationshipBody;
use crate::inbound::http::messages::{CreateMessageRequest, MessageBody, UpdateMessageRequest};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest, UserBody};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Twittor backend API",
        description = "Users, messages and follow relationships.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::messages::list_user_messages,
        crate::inbound::http::messages::create_message,
        crate::inbound::http::messages::get_message,
        crate::inbound::http::messages::update_message,
        crate::inbound::http::messages::delete_message,
        crate::inbound::http::follows::list_following,
        crate::inbound::http::follows::list_followers,
        crate::inbound::http::follows::get_relationship,
        crate::inbound::http::follows::follow_user,
        crate::inbound::http::follows::unfollow_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserBody,
        CreateUserRequest,
        UpdateUserRequest,
        MessageBody,
        CreateMessageRequest,
        UpdateMessageRequest,
        RelationshipBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Create, read and update users"),
        (name = "messages", description = "Messages owned by users"),
        (name = "follows", description = "Directional follow relationships"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("UserBody", &["id", "name", "email", "createdAt", "updatedAt"])]
    #[case("MessageBody", &["id", "userId", "content", "createdAt", "updatedAt"])]
    fn schemas_expose_camel_case_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let present = object_fields(name);
        for field in fields {
            assert!(present.iter().any(|p| p == field), "{name} lacks {field}");
        }
    }

    #[rstest]
    #[case("/api/v1/users")]
    #[case("/api/v1/users/{user_id}")]
    #[case("/api/v1/users/{user_id}/messages")]
    #[case("/api/v1/users/{user_id}/following/{other_id}")]
    #[case("/api/v1/messages/{message_id}")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
