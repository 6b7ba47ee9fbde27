//! Test helpers for the HTTP handlers.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use crate::Trace;
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Application wired to a fresh in-memory store, with tracing middleware.
pub(crate) fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let store = Arc::new(InMemoryStore::new());
    let state = HttpState::from_repositories(store.clone(), store.clone(), store);
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}

/// Create a user through the API and return its id.
pub(crate) async fn create_user<S>(app: &S, name: &str) -> i64
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "name": name, "email": format!("{name}@example.com") }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(app, request).await;
    body.get("id").and_then(Value::as_i64).expect("user id")
}
