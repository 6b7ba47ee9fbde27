//! Tests for follow HTTP handlers.

use super::*;
use crate::inbound::http::test_utils::{create_user, test_app};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;

async fn send<S>(app: &S, request: actix_test::TestRequest) -> StatusCode
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    actix_test::call_service(app, request.to_request())
        .await
        .status()
}

async fn ids<S>(app: &S, uri: &str) -> Vec<i64>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let users: Vec<UserBody> =
        actix_test::call_and_read_body_json(app, actix_test::TestRequest::get().uri(uri).to_request())
            .await;
    users.into_iter().map(|user| user.id).collect()
}

async fn relationship<S>(app: &S, user: i64, other: i64) -> RelationshipBody
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/v1/users/{user}/following/{other}"))
        .to_request();
    actix_test::call_and_read_body_json(app, request).await
}

#[actix_web::test]
async fn following_twice_yields_one_edge() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;
    let bob = create_user(&app, "bob").await;
    let uri = format!("/api/v1/users/{ada}/following/{bob}");

    assert_eq!(send(&app, actix_test::TestRequest::put().uri(&uri)).await, StatusCode::NO_CONTENT);
    assert_eq!(send(&app, actix_test::TestRequest::put().uri(&uri)).await, StatusCode::NO_CONTENT);

    assert_eq!(ids(&app, &format!("/api/v1/users/{ada}/following")).await, vec![bob]);
    assert_eq!(ids(&app, &format!("/api/v1/users/{bob}/followers")).await, vec![ada]);
}

#[actix_web::test]
async fn unfollowing_a_non_followed_user_is_a_no_op() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;
    let bob = create_user(&app, "bob").await;

    let status = send(
        &app,
        actix_test::TestRequest::delete().uri(&format!("/api/v1/users/{ada}/following/{bob}")),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(ids(&app, &format!("/api/v1/users/{ada}/following")).await.is_empty());
}

#[actix_web::test]
async fn unfollow_removes_only_the_directed_edge() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;
    let bob = create_user(&app, "bob").await;
    send(&app, actix_test::TestRequest::put().uri(&format!("/api/v1/users/{ada}/following/{bob}"))).await;
    send(&app, actix_test::TestRequest::put().uri(&format!("/api/v1/users/{bob}/following/{ada}"))).await;

    send(&app, actix_test::TestRequest::delete().uri(&format!("/api/v1/users/{ada}/following/{bob}"))).await;

    assert!(ids(&app, &format!("/api/v1/users/{ada}/following")).await.is_empty());
    assert_eq!(ids(&app, &format!("/api/v1/users/{bob}/following")).await, vec![ada]);
}

#[actix_web::test]
async fn relationship_reports_each_direction() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;
    let bob = create_user(&app, "bob").await;
    send(&app, actix_test::TestRequest::put().uri(&format!("/api/v1/users/{ada}/following/{bob}"))).await;

    let from_ada = relationship(&app, ada, bob).await;
    assert!(from_ada.following);
    assert!(!from_ada.followed_by);

    let from_bob = relationship(&app, bob, ada).await;
    assert!(!from_bob.following);
    assert!(from_bob.followed_by);
}

#[rstest]
#[case("/api/v1/users/1/following/9")]
#[case("/api/v1/users/9/following/1")]
#[actix_web::test]
async fn follow_requires_both_users(#[case] uri: &str) {
    let app = actix_test::init_service(test_app()).await;
    create_user(&app, "ada").await;

    let status = send(&app, actix_test::TestRequest::put().uri(uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn relationship_with_missing_user_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;

    let status = send(
        &app,
        actix_test::TestRequest::get().uri(&format!("/api/v1/users/{ada}/following/99")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case("/api/v1/users/9/following")]
#[case("/api/v1/users/9/followers")]
#[actix_web::test]
async fn listing_for_missing_user_is_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app()).await;

    let status = send(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_other_id_is_bad_request() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;

    let status = send(
        &app,
        actix_test::TestRequest::put().uri(&format!("/api/v1/users/{ada}/following/bob")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn self_follow_is_permitted() {
    let app = actix_test::init_service(test_app()).await;
    let ada = create_user(&app, "ada").await;

    send(&app, actix_test::TestRequest::put().uri(&format!("/api/v1/users/{ada}/following/{ada}"))).await;

    assert_eq!(ids(&app, &format!("/api/v1/users/{ada}/followers")).await, vec![ada]);
}
