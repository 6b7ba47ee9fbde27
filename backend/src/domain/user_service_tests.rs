//! Tests for the user service.

use std::sync::Arc;

use chrono::Utc;
use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::MockUserRepository;
use crate::domain::{ErrorCode, UserDraft};

fn user_id(raw: i64) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn stored_user(id: i64, name: &str) -> User {
    let at = Utc::now();
    User::new(UserDraft {
        id: user_id(id),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        created_at: at,
        updated_at: at,
    })
}

#[tokio::test]
async fn create_user_returns_stored_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|new_user| Ok(stored_user(1, new_user.name())));

    let service = UserService::new(Arc::new(repo));
    let user = service
        .create_user(NewUser::new("Ada", "ada@example.com"))
        .await
        .expect("create succeeds");

    assert_eq!(user.id(), user_id(1));
    assert_eq!(user.name(), "Ada");
}

#[tokio::test]
async fn get_user_maps_missing_row_to_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(user_id(7)))
        .times(1)
        .return_once(|_| Ok(None));

    let service = UserService::new(Arc::new(repo));
    let err = service
        .get_user(user_id(7))
        .await
        .expect_err("missing user");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "user 7 not found");
}

#[tokio::test]
async fn update_user_with_no_fields_reads_without_writing() {
    let mut repo = MockUserRepository::new();
    repo.expect_update().times(0);
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(stored_user(2, "Grace"))));

    let service = UserService::new(Arc::new(repo));
    let user = service
        .update_user(user_id(2), UserChanges::default())
        .await
        .expect("no-op update succeeds");

    assert_eq!(user.name(), "Grace");
}

#[tokio::test]
async fn update_user_maps_missing_row_to_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update().times(1).return_once(|_, _| Ok(None));

    let service = UserService::new(Arc::new(repo));
    let changes = UserChanges::new(Some("New".to_owned()), None);
    let err = service
        .update_user(user_id(3), changes)
        .await
        .expect_err("missing user");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(UserPersistenceError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_users_maps_persistence_failures(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_list().times(1).return_once(move || Err(failure));

    let service = UserService::new(Arc::new(repo));
    let err = service.list_users().await.expect_err("repository failure");

    assert_eq!(err.code(), expected);
}
