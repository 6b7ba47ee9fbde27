//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::{Scope, web};

pub mod error;
pub mod follows;
pub mod health;
pub mod messages;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Prefix shared by every REST endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Scope registering every REST endpoint under [`API_PREFIX`].
///
/// The caller provides `web::Data<HttpState>`.
pub fn api_scope() -> Scope {
    web::scope(API_PREFIX)
        .app_data(validation::json_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(messages::list_user_messages)
        .service(messages::create_message)
        .service(messages::get_message)
        .service(messages::update_message)
        .service(messages::delete_message)
        .service(follows::list_following)
        .service(follows::list_followers)
        .service(follows::get_relationship)
        .service(follows::follow_user)
        .service(follows::unfollow_user)
}
