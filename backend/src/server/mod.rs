//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::api_scope;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct the HTTP server and mark the service ready.
///
/// The returned [`Server`] must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn app_serves_api_and_probes() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let http_state = web::Data::new(build_http_state(&ServerConfig::new(
            "127.0.0.1:0".parse().expect("literal address"),
        )));
        let app = actix_test::init_service(build_app(health, http_state)).await;

        let ready_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(ready_res.status(), StatusCode::OK);

        let users_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/v1/users").to_request(),
        )
        .await;
        assert_eq!(users_res.status(), StatusCode::OK);
        assert!(users_res.headers().contains_key("trace-id"));
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_server_marks_ready() {
        let health = web::Data::new(HealthState::new());
        assert!(!health.is_ready(), "state should start unready");
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("literal address"));

        let _server = create_server(health.clone(), config).expect("server binds");

        assert!(health.is_ready(), "server creation should mark readiness");
    }
}
